pub mod anchors;
pub mod contact;
pub mod header;
pub mod mobile_nav;
pub mod observers;
pub mod tabs;
pub mod theme;
