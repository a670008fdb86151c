pub mod network_nodes;
pub mod news_card;
pub mod pill_nav;
