use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a drop rearranges the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReorderPolicy {
    /// Take the item out and insert it at the target; the items in between shift by one.
    #[default]
    Move,
    /// Exchange the dragged item with the one at the target.
    Swap,
}

impl ReorderPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            ReorderPolicy::Move => "move",
            ReorderPolicy::Swap => "swap",
        }
    }

    /// Rearrange `items` for a drag from `from` onto `to`. Returns `false` (and leaves the list
    /// untouched) when nothing would change or an index is out of range.
    pub fn apply<T>(self, items: &mut Vec<T>, from: usize, to: usize) -> bool {
        if from == to || from >= items.len() || to >= items.len() {
            return false;
        }
        match self {
            ReorderPolicy::Move => {
                let item = items.remove(from);
                items.insert(to, item);
            }
            ReorderPolicy::Swap => items.swap(from, to),
        }
        true
    }

    /// For every position after `apply(from, to)`, the position its content occupied before, or
    /// `None` when the content did not move.
    pub fn origins(self, len: usize, from: usize, to: usize) -> Vec<Option<usize>> {
        let mut out = vec![None; len];
        if from == to || from >= len || to >= len {
            return out;
        }
        match self {
            ReorderPolicy::Move if from < to => {
                for (pos, origin) in out.iter_mut().enumerate().take(to).skip(from) {
                    *origin = Some(pos + 1);
                }
                out[to] = Some(from);
            }
            ReorderPolicy::Move => {
                out[to] = Some(from);
                for (pos, origin) in out.iter_mut().enumerate().take(from + 1).skip(to + 1) {
                    *origin = Some(pos - 1);
                }
            }
            ReorderPolicy::Swap => {
                out[from] = Some(to);
                out[to] = Some(from);
            }
        }
        out
    }
}

impl fmt::Display for ReorderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPolicy(pub String);

impl fmt::Display for UnknownPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown reorder policy `{}` (expected move or swap)", self.0)
    }
}

impl std::error::Error for UnknownPolicy {}

impl FromStr for ReorderPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "move" => Ok(ReorderPolicy::Move),
            "swap" => Ok(ReorderPolicy::Swap),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dock/reorder.rs"]
mod tests;
