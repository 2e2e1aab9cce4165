pub mod banner;
pub mod character_card;
pub mod team_card;
