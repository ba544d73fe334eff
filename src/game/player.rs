use std::hash::{Hash, Hasher};

/// Numeric tag written into occupied cells. Never zero, unique per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u8);

impl PlayerId {
    pub fn value(self) -> u8 {
        self.0
    }
}

/// One of the two seats at the table.
///
/// Two players are equal when they carry the same [`PlayerId`]; the name and
/// display marker play no part in comparison, so players copied into cloned
/// search branches still compare equal.
#[derive(Debug, Clone)]
pub struct Player {
    name: &'static str,
    id: PlayerId,
    display: char,
}

impl Player {
    pub fn new(name: &'static str, id: PlayerId, display: char) -> Self {
        Player { name, id, display }
    }

    /// First player to move: `A`, tag 1, shown as `O`.
    pub fn a() -> Self {
        Player::new("A", PlayerId(1), 'O')
    }

    /// Second player: `B`, tag 2, shown as `X`.
    pub fn b() -> Self {
        Player::new("B", PlayerId(2), 'X')
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Marker used when a board is rendered as text.
    pub fn display(&self) -> char {
        self.display
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_players() {
        let a = Player::a();
        let b = Player::b();
        assert_eq!(a.name(), "A");
        assert_eq!(a.id(), PlayerId(1));
        assert_eq!(a.display(), 'O');
        assert_eq!(b.name(), "B");
        assert_eq!(b.id().value(), 2);
        assert_eq!(b.display(), 'X');
        assert_ne!(a, b);
    }

    #[test]
    fn test_equality_ignores_marker() {
        let a = Player::a();
        let renamed = Player::new("Alice", PlayerId(1), '@');
        assert_eq!(a, renamed);
    }

    #[test]
    fn test_equality_survives_clone() {
        let a = Player::a();
        assert_eq!(a.clone(), a);
    }
}
