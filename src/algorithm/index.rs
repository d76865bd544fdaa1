use crate::algorithm::bitset::TileBitset;
use crate::io::error::{GenerationError, Result};
use crate::model::constraints::Constraint;
use crate::model::tiles::TileSet;
use crate::spatial::direction::Direction;

/// Precomputed directional compatibility lookup
///
/// Built once per run from the constraint list after bidirectional
/// expansion; answers `allowed(tile, direction)` in O(1) afterwards.
/// Entries are deduplicated by `(tile, tile, direction)` because licensed
/// sets are bitsets.
///
/// A `(tile, direction)` pair mentioned by no constraint is unconstrained:
/// every tile is licensed there. This keeps sparse constraint sets (or an
/// empty one) satisfiable instead of making every unmentioned adjacency a
/// contradiction.
#[derive(Clone, Debug)]
pub struct ConstraintIndex {
    rules: Vec<Option<TileBitset>>,
    tile_count: usize,
}

impl ConstraintIndex {
    /// Build the lookup from a constraint list
    ///
    /// # Errors
    ///
    /// Returns an error if any constraint references a tile id not present
    /// in the tile set.
    pub fn build(tile_set: &TileSet, constraints: &[Constraint]) -> Result<Self> {
        let tile_count = tile_set.len();
        let mut rules: Vec<Option<TileBitset>> = vec![None; tile_count * Direction::ALL.len()];

        for constraint in constraints {
            for (source_id, target_id, direction) in constraint.expanded_pairs() {
                let source = tile_set.index_of(source_id).ok_or_else(|| {
                    GenerationError::UnknownTile {
                        tile: source_id.to_string(),
                        direction,
                    }
                })?;
                let target = tile_set.index_of(target_id).ok_or_else(|| {
                    GenerationError::UnknownTile {
                        tile: target_id.to_string(),
                        direction,
                    }
                })?;

                let slot = source * Direction::ALL.len() + direction.index();
                if let Some(entry) = rules.get_mut(slot) {
                    entry
                        .get_or_insert_with(|| TileBitset::new(tile_count))
                        .insert(target);
                }
            }
        }

        Ok(Self { rules, tile_count })
    }

    /// Number of tiles the index was built for
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Tiles licensed to occupy the neighbor in `direction` from `tile`
    ///
    /// `None` means the pair is unconstrained and every tile is licensed.
    pub fn allowed(&self, tile: usize, direction: Direction) -> Option<&TileBitset> {
        self.rules
            .get(tile * Direction::ALL.len() + direction.index())
            .and_then(Option::as_ref)
    }

    /// Whether `candidate` may occupy the neighbor in `direction` from `tile`
    pub fn permits(&self, tile: usize, direction: Direction, candidate: usize) -> bool {
        self.allowed(tile, direction)
            .is_none_or(|licensed| licensed.contains(candidate))
    }

    /// Union of `allowed(t, direction)` over every tile in `domain`
    ///
    /// `None` means at least one domain member is unconstrained in that
    /// direction, so the union places no restriction on the neighbor.
    pub fn union_allowed(&self, domain: &TileBitset, direction: Direction) -> Option<TileBitset> {
        let mut union = TileBitset::new(self.tile_count);
        for tile in domain.iter_members() {
            match self.allowed(tile, direction) {
                Some(licensed) => union.union_with(licensed),
                None => return None,
            }
        }
        Some(union)
    }

    /// Number of explicit licensed pairs after expansion and deduplication
    pub fn rule_count(&self) -> usize {
        self.rules
            .iter()
            .flatten()
            .map(TileBitset::count)
            .sum()
    }
}
