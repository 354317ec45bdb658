use crate::state::navigation::PlayerPair;

const MAX_SELECTED: usize = 2;

/// Players tapped on the bracket screen, in tap order. Holds at most two ids.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BracketSelection {
    selected: Vec<String>,
}

impl BracketSelection {
    /// Select or deselect `player_id`. Returns the completed pair when this tap
    /// brought the selection from one player to two.
    pub fn toggle(&mut self, player_id: &str) -> Option<PlayerPair> {
        if let Some(idx) = self.selected.iter().position(|id| id == player_id) {
            self.selected.remove(idx);
            return None;
        }
        if self.selected.len() >= MAX_SELECTED {
            return None;
        }
        self.selected.push(player_id.to_string());
        if self.selected.len() == MAX_SELECTED {
            return self.pair();
        }
        None
    }

    /// The current pair, if two players are selected.
    pub fn pair(&self) -> Option<PlayerPair> {
        match self.selected.as_slice() {
            [first, second] => PlayerPair::new(first.as_str(), second.as_str()).ok(),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.selected.iter().any(|id| id == player_id)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
