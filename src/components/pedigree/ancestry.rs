//! Generation rows for a mouse's family tree.
//!
//! Row `g` (counting back from the subject) has `2^g` slots. The father of
//! the mouse in slot `i` sits in slot `2i` of the next older row and the
//! mother in slot `2i + 1`, so every parent lands directly above its child
//! when the rows are laid out with equal-width slots.

use std::collections::HashMap;

use super::config::MAX_GENERATIONS;
use crate::error::{AppError, Result};

/// Sex of a mouse; the father slot always holds the male parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sex {
	/// Dam.
	Female,
	/// Sire.
	Male,
}

impl Sex {
	/// Glyph shown in the tree box.
	pub fn symbol(self) -> &'static str {
		match self {
			Sex::Female => "♀",
			Sex::Male => "♂",
		}
	}
}

/// One colony record.
#[derive(Clone, Debug, PartialEq)]
pub struct Mouse {
	/// Primary key, also the `data-mouse-id` of its box.
	pub id: u32,
	/// Text shown in the box.
	pub label: String,
	/// Dam or sire.
	pub sex: Sex,
	/// Father's id, if recorded.
	pub father: Option<u32>,
	/// Mother's id, if recorded.
	pub mother: Option<u32>,
}

impl Mouse {
	/// A mouse with no recorded parents.
	pub fn new(id: u32, label: impl Into<String>, sex: Sex) -> Self {
		Self {
			id,
			label: label.into(),
			sex,
			father: None,
			mother: None,
		}
	}

	/// Sets both parent ids.
	pub fn with_parents(mut self, father: Option<u32>, mother: Option<u32>) -> Self {
		self.father = father;
		self.mother = mother;
		self
	}
}

/// One generation, oldest rows first in [`Pedigree::ancestry`].
pub type GenerationRow<'a> = Vec<Option<&'a Mouse>>;

/// Every known mouse, keyed by id.
#[derive(Clone, Debug, Default)]
pub struct Pedigree {
	mice: HashMap<u32, Mouse>,
}

impl Pedigree {
	/// An empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces a mouse, returning the one it replaced.
	pub fn insert(&mut self, mouse: Mouse) -> Option<Mouse> {
		self.mice.insert(mouse.id, mouse)
	}

	/// Looks up a mouse by id.
	pub fn get(&self, id: u32) -> Option<&Mouse> {
		self.mice.get(&id)
	}

	/// Number of mice.
	pub fn len(&self) -> usize {
		self.mice.len()
	}

	/// True when no mouse is registered.
	pub fn is_empty(&self) -> bool {
		self.mice.is_empty()
	}

	fn parents_of(&self, slot: Option<&Mouse>) -> [Option<&Mouse>; 2] {
		match slot {
			Some(mouse) => [
				mouse.father.and_then(|id| self.get(id)),
				mouse.mother.and_then(|id| self.get(id)),
			],
			None => [None, None],
		}
	}

	/// Lays out `subject`'s ancestors, oldest generation first and the
	/// subject alone in the last row.
	///
	/// Stops at the first generation with no known mouse or once
	/// `max_generations` rows exist, never more than [`MAX_GENERATIONS`].
	/// Parent ids missing from the pedigree become empty slots.
	pub fn ancestry(&self, subject: u32, max_generations: usize) -> Result<Vec<GenerationRow<'_>>> {
		let root = self.get(subject).ok_or(AppError::UnknownMouse(subject))?;
		let mut rows = vec![vec![Some(root)]];
		let max_generations = max_generations.min(MAX_GENERATIONS);

		while rows.len() < max_generations {
			let Some(youngest) = rows.last() else {
				break;
			};
			let older: GenerationRow<'_> = youngest
				.iter()
				.flat_map(|slot| self.parents_of(*slot))
				.collect();
			if older.iter().all(Option::is_none) {
				break;
			}
			rows.push(older);
		}

		rows.reverse();
		Ok(rows)
	}
}

impl FromIterator<Mouse> for Pedigree {
	fn from_iter<I: IntoIterator<Item = Mouse>>(iter: I) -> Self {
		Self {
			mice: iter.into_iter().map(|m| (m.id, m)).collect(),
		}
	}
}
