pub mod achievement;
pub mod catalog;
pub mod dice;
pub mod interaction;
pub mod leaderboard;
pub mod sponsor;
