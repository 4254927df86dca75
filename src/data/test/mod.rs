mod catalog;
mod disposable;
mod game;
mod player_achievement;
mod sponsor;
