use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterTile {
    pub id: Uuid,
    pub value: char,
    pub used: bool,
}

impl LetterTile {
    fn new(value: char) -> Self {
        Self {
            id: Uuid::new_v4(),
            value,
            used: false,
        }
    }
}

/// Slots to fill left to right and the shuffled tiles to fill them with.
///
/// The tiles hold exactly the characters of the target word; a used tile occupies one slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuzzleBoard {
    slots: Vec<Option<char>>,
    tiles: Vec<LetterTile>,
}

impl PuzzleBoard {
    pub fn new(word: &str) -> Self {
        Self::with_rng(word, &mut rand::rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Self {
        let mut tiles: Vec<LetterTile> = word.chars().map(LetterTile::new).collect();
        tiles.shuffle(rng);
        Self {
            slots: vec![None; tiles.len()],
            tiles,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    pub fn tiles(&self) -> &[LetterTile] {
        &self.tiles
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn has_placed(&self) -> bool {
        self.slots.iter().any(Option::is_some)
    }

    /// Puts the tile into the first empty slot. Returns `false` when nothing changed.
    pub fn place(&mut self, tile_id: Uuid) -> bool {
        let Some(slot_index) = self.slots.iter().position(Option::is_none) else {
            return false;
        };
        let Some(tile) = self.tiles.iter_mut().find(|t| t.id == tile_id) else {
            return false;
        };
        if tile.used {
            return false;
        }

        self.slots[slot_index] = Some(tile.value);
        tile.used = true;
        true
    }

    /// Clears the rightmost filled slot and frees the first used tile with that character.
    pub fn delete_last(&mut self) -> bool {
        let Some(last_index) = self.slots.iter().rposition(Option::is_some) else {
            return false;
        };
        let Some(value) = self.slots[last_index].take() else {
            return false;
        };

        if let Some(tile) = self.tiles.iter_mut().find(|t| t.used && t.value == value) {
            tile.used = false;
        }
        true
    }

    /// Filled slots in order.
    pub fn attempt(&self) -> String {
        self.slots.iter().flatten().collect()
    }

    /// Empties every slot and returns every tile.
    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
        self.tiles.iter_mut().for_each(|t| t.used = false);
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.tiles.clear();
    }

    /// First unused tile showing `value`.
    pub fn find_unused(&self, value: char) -> Option<Uuid> {
        self.tiles
            .iter()
            .find(|t| !t.used && t.value == value)
            .map(|t| t.id)
    }
}
