mod account;
mod institute;
mod manager;
mod score;
mod session;
