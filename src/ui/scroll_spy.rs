#[cfg(test)]
#[path = "scroll_spy_test.rs"]
mod scroll_spy_test;

use serde::Deserialize;

/// Which way the page's sections are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScrollAxis {
    Vertical,
    /// One viewport-wide panel per section.
    Horizontal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn from_key(key: &str) -> Option<Direction> {
        match key {
            "ArrowLeft" => Some(Direction::Previous),
            "ArrowRight" => Some(Direction::Next),
            _ => None,
        }
    }

    pub fn from_wheel(delta_y: f64) -> Option<Direction> {
        if delta_y > 0.0 {
            Some(Direction::Next)
        } else if delta_y < 0.0 {
            Some(Direction::Previous)
        } else {
            None
        }
    }
}

/// The section whose `[top - header_offset, top - header_offset + height)`
/// range holds `offset`.
pub fn active_section(sections: &[SectionBounds], offset: f64, header_offset: f64) -> Option<&str> {
    sections
        .iter()
        .find(|s| {
            let start = s.top - header_offset;
            offset >= start && offset < start + s.height
        })
        .map(|s| s.id.as_str())
}

/// Horizontal layout: each section is one viewport wide.
pub fn section_at_index<'a>(ids: &'a [String], scroll_left: f64, viewport_width: f64) -> Option<&'a str> {
    if viewport_width <= 0.0 {
        return None;
    }
    let index = (scroll_left / viewport_width).round();
    if index < 0.0 {
        return None;
    }
    ids.get(index as usize).map(String::as_str)
}

pub fn horizontal_offset(ids: &[String], id: &str, viewport_width: f64) -> Option<f64> {
    ids.iter()
        .position(|s| s == id)
        .map(|index| index as f64 * viewport_width)
}

/// Adjacent section, stopping at either end.
pub fn neighbor<'a>(ids: &'a [String], current: &str, direction: Direction) -> Option<&'a str> {
    let index = ids.iter().position(|s| s == current)?;
    let next = match direction {
        Direction::Previous => index.checked_sub(1)?,
        Direction::Next => index + 1,
    };
    ids.get(next).map(String::as_str)
}

/// `#services` -> `services` when it names a known section.
pub fn section_from_hash<'a>(ids: &'a [String], hash: &str) -> Option<&'a str> {
    let id = hash.strip_prefix('#').unwrap_or(hash);
    if id.is_empty() {
        return None;
    }
    ids.iter().find(|s| *s == id).map(String::as_str)
}

/// Section to record in the address bar after the active section moved from
/// `previous` to `active`. Nothing when it did not move or the hash already
/// names it.
pub fn hash_update<'a>(current_hash: &str, previous: Option<&str>, active: Option<&'a str>) -> Option<&'a str> {
    let active = active?;
    let current = current_hash.strip_prefix('#').unwrap_or(current_hash);
    if previous == Some(active) || current == active {
        return None;
    }
    Some(active)
}
