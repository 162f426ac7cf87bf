//! Centralized icon definitions.
//!
//! The explorer and viewer pull their icons from here so the icon
//! family can be swapped in one place.

use icondata::Icon;

pub const FOLDER: Icon = icondata::LuFolder;
pub const FILE: Icon = icondata::LuFile;
pub const FILE_TEXT: Icon = icondata::LuFileText;
pub const CHEVRON_RIGHT: Icon = icondata::LuChevronRight;
pub const CHEVRON_DOWN: Icon = icondata::LuChevronDown;
pub const CLOSE: Icon = icondata::LuX;
