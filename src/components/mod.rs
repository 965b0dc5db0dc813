//! Page widgets: the family tree view and its peers in the page chrome.

pub mod dropdown;
pub mod password;
pub mod pedigree;
