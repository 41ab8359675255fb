//! Attaching tags to cards, creating missing labels on the way.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::board::{BoardClient, BoardError, BoardResult, NewLabel};
use crate::tags::TagSpec;

#[cfg(test)]
use mockall::automock;

/// Source of colour choices for labels created without one.
#[cfg_attr(test, automock)]
pub trait ColourChooser {
    /// Pick an index in `0..count`. `count` is never zero.
    fn pick(&mut self, count: usize) -> usize;
}

/// [`ColourChooser`] backed by a random number generator.
pub struct RandomColours<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomColours<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomColours<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ColourChooser for RandomColours<R> {
    fn pick(&mut self, count: usize) -> usize {
        self.rng.gen_range(0..count)
    }
}

/// Choose a colour from `palette` using `chooser`.
pub fn choose_colour<P: ColourChooser>(palette: &[&str], chooser: &mut P) -> BoardResult<String> {
    if palette.is_empty() {
        return Err(BoardError::EmptyPalette);
    }
    let index = chooser.pick(palette.len()) % palette.len();
    Ok(palette[index].to_string())
}

/// What attaching a tag did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachOutcome {
    /// The label already existed and is now on the card.
    Attached,
    /// The label was created with `colour`, then attached.
    Created { colour: String },
}

/// Attaches tags to cards for the duration of one command.
///
/// Remembers which labels it created so a later reference to the same name
/// does not warn about its colour being ignored.
pub struct LabelAttacher<'a, C: BoardClient, P: ColourChooser> {
    board: &'a C,
    chooser: P,
    created: HashSet<String>,
}

impl<'a, C: BoardClient, P: ColourChooser> LabelAttacher<'a, C, P> {
    pub fn new(board: &'a C, chooser: P) -> Self {
        Self {
            board,
            chooser,
            created: HashSet::new(),
        }
    }

    /// Label names created by this attacher.
    pub fn created(&self) -> &HashSet<String> {
        &self.created
    }

    /// Attach `tag` to a card, creating the label first if the board lacks it.
    ///
    /// At most two attach attempts are made. A colour on the tag only
    /// applies when the label gets created.
    pub async fn attach_tag(&mut self, card_id: &str, tag: &TagSpec) -> BoardResult<AttachOutcome> {
        match self.board.attach_label(card_id, &tag.name).await {
            Ok(()) => {
                if let Some(colour) = &tag.colour {
                    if !self.created.contains(&tag.name) {
                        warn!(label = %tag.name, %colour, "label already exists, ignoring colour");
                    }
                }
                return Ok(AttachOutcome::Attached);
            }
            Err(e) if e.is_label_missing() => {
                debug!(label = %tag.name, "label missing, creating it");
            }
            Err(e) => return Err(e),
        }

        let colour = match &tag.colour {
            Some(colour) => colour.clone(),
            None => choose_colour(self.board.colour_palette(), &mut self.chooser)?,
        };

        self.board
            .create_label(&NewLabel {
                name: tag.name.clone(),
                color: colour.clone(),
                position: 0.0,
            })
            .await?;
        self.created.insert(tag.name.clone());
        info!(label = %tag.name, %colour, "created label");

        self.board.attach_label(card_id, &tag.name).await?;
        Ok(AttachOutcome::Created { colour })
    }
}
