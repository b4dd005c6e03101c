mod lifecycle;
mod mint_burn;
