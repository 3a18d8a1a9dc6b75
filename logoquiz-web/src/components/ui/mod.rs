pub mod game_board;
pub mod lobby;
pub mod logo_art;
pub mod player_list;
pub mod podium;
