mod mint_burn;
mod roles;
