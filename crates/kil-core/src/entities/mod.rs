//! Entity structs for the Kilmere school population and its spells.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so `kil`
//! can render them directly and the roster schema can be generated from them.

mod death_eater;
mod ghost;
mod member;
mod professor;
mod pupil;
mod spell;

pub use death_eater::DeathEater;
pub use ghost::Ghost;
pub use member::{CharacterTraits, Member, SchoolMember};
pub use professor::Professor;
pub use pupil::{Acquaintance, Pet, Pupil};
pub use spell::{Spell, Spellcraft};
