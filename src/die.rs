use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::rules::DIE_FACES;

/// Uniform die over `1..=faces`. Randomness is always supplied by the caller.
///
/// Serialized as its face count; deserializing goes through [`Die::new`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Die {
    faces: u32,
}

impl Die {
    /// A die with fewer than two faces can only ever bust and is refused.
    pub fn new(faces: u32) -> Result<Self, GameError> {
        if faces < 2 {
            return Err(GameError::InvalidConfiguration(
                "die must have at least two faces",
            ));
        }
        Ok(Self { faces })
    }

    pub const fn standard() -> Self {
        Self { faces: DIE_FACES }
    }

    pub fn faces(&self) -> u32 {
        self.faces
    }

    #[inline]
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(1..=self.faces)
    }

    /// Draws `samples` rolls from `rng` and fails unless every face showed up.
    /// Zero samples cannot show anything and is a configuration error.
    pub fn validate_source<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        samples: usize,
    ) -> Result<(), GameError> {
        if samples == 0 {
            return Err(GameError::InvalidConfiguration(
                "source validation needs at least one sample",
            ));
        }
        let mut seen = vec![false; self.faces as usize];
        for _ in 0..samples {
            seen[(self.roll(rng) - 1) as usize] = true;
            if seen.iter().all(|s| *s) {
                return Ok(());
            }
        }
        let missing: Vec<u32> = seen
            .iter()
            .enumerate()
            .filter(|(_, s)| !**s)
            .map(|(idx, _)| idx as u32 + 1)
            .collect();
        Err(GameError::BiasedRandomSource {
            faces: self.faces,
            missing,
        })
    }
}

impl TryFrom<u32> for Die {
    type Error = GameError;

    fn try_from(faces: u32) -> Result<Self, Self::Error> {
        Self::new(faces)
    }
}

impl From<Die> for u32 {
    fn from(die: Die) -> Self {
        die.faces
    }
}

impl Default for Die {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    use super::*;

    #[test]
    fn test_single_face_die_rejected() {
        assert!(matches!(
            Die::new(1),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(Die::new(0).is_err());
        assert_eq!(Die::new(6), Ok(Die::standard()));
    }

    #[test]
    fn test_rolls_stay_in_range() {
        let die = Die::standard();
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts = [0usize; 6];
        for _ in 0..6000 {
            let face = die.roll(&mut rng);
            assert!((1..=6).contains(&face));
            counts[(face - 1) as usize] += 1;
        }
        // Each face expected ~1000 times.
        assert!(counts.iter().all(|&c| c > 800 && c < 1200), "{counts:?}");
    }

    #[test]
    fn test_validate_accepts_fair_source() {
        let mut rng = StdRng::seed_from_u64(11);
        assert_eq!(Die::standard().validate_source(&mut rng, 1000), Ok(()));
    }

    #[test]
    fn test_validate_rejects_constant_source() {
        // A generator stuck at zero always yields the lowest face.
        let mut rng = StepRng::new(0, 0);
        match Die::standard().validate_source(&mut rng, 1000) {
            Err(GameError::BiasedRandomSource { faces, missing }) => {
                assert_eq!(faces, 6);
                assert_eq!(missing, vec![2, 3, 4, 5, 6]);
            }
            other => panic!("expected biased source error, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_samples_is_a_configuration_error() {
        let mut rng = StdRng::seed_from_u64(11);
        assert!(matches!(
            Die::standard().validate_source(&mut rng, 0),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_deserialize_goes_through_new() {
        assert_eq!(serde_json::from_str::<Die>("6").ok(), Some(Die::standard()));
        assert!(serde_json::from_str::<Die>("1").is_err());
        assert!(serde_json::from_str::<Die>("0").is_err());
        assert_eq!(serde_json::to_string(&Die::standard()).ok().as_deref(), Some("6"));
        assert_eq!(Die::try_from(1u32), Die::new(1));
    }
}
