pub mod analytics;
pub mod feed;
pub mod home;
pub mod not_found;

use crate::components::pill_nav::PillNavItem;

/// Navigation entries shared by every page.
pub fn nav_items() -> Vec<PillNavItem> {
	vec![
		PillNavItem::new("Home", "/"),
		PillNavItem::new("Live Feed", "/feed"),
		PillNavItem::new("Analyze", "/analytics"),
		PillNavItem::new("Activity", "#"),
	]
}
