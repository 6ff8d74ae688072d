//! The fixed roster of selectable characters.

use serde::Serialize;

/// A character that can be picked in the score-up character filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Character {
    /// Stable id, 1 through 17.
    pub id: i32,
    /// Display name, matched exactly against `cards.name`.
    pub name: &'static str,
}

/// Every character in id order.
pub static CHARACTERS: [Character; 17] = [
    Character { id: 1, name: "和泉一織" },
    Character { id: 2, name: "二階堂大和" },
    Character { id: 3, name: "和泉三月" },
    Character { id: 4, name: "四葉環" },
    Character { id: 5, name: "逢坂壮五" },
    Character { id: 6, name: "六弥ナギ" },
    Character { id: 7, name: "七瀬陸" },
    Character { id: 8, name: "八乙女楽" },
    Character { id: 9, name: "九条天" },
    Character { id: 10, name: "十龍之介" },
    Character { id: 11, name: "百" },
    Character { id: 12, name: "千" },
    Character { id: 13, name: "亥清悠" },
    Character { id: 14, name: "狗丸トウマ" },
    Character { id: 15, name: "棗巳波" },
    Character { id: 16, name: "御堂虎於" },
    Character { id: 17, name: "大神万理" },
];

/// Look up a character's display name by id.
pub fn character_name(id: i32) -> Option<&'static str> {
    CHARACTERS.iter().find(|c| c.id == id).map(|c| c.name)
}

/// Map ids to names, silently dropping ids outside the roster.
pub fn character_names(ids: &[i32]) -> Vec<&'static str> {
    ids.iter().filter_map(|&id| character_name(id)).collect()
}
