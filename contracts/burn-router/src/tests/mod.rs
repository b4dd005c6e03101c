mod admin;
mod cc_burn;
mod proof_validation;
