#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::fmt;

use enum_assoc::Assoc;
use tesserae_theme::SharedString;

use crate::{
    ContractViolation,
    element::{Element, Render, TryRender, hstack, vstack},
};

/// What a slot producer may hand back: a rendered component, or nothing.
///
/// Returning nothing for a slot is a contract violation, never a silently
/// skipped slot.
pub trait IntoSlot {
    fn into_slot(self) -> Option<Element>;
}

impl<R: Render> IntoSlot for R {
    fn into_slot(self) -> Option<Element> {
        Some(self.render())
    }
}

impl<R: Render> IntoSlot for Option<R> {
    fn into_slot(self) -> Option<Element> {
        self.map(|component| component.render())
    }
}

/// Produces a slot's content from two bound strings, such as a title and a caption.
///
/// Implemented for any `Fn(&str, &str) -> impl IntoSlot`.
pub trait TextPairProducer {
    fn produce(&self, first: &str, second: &str) -> Option<Element>;
}

impl<F, R> TextPairProducer for F
where
    F: Fn(&str, &str) -> R,
    R: IntoSlot,
{
    fn produce(&self, first: &str, second: &str) -> Option<Element> {
        self(first, second).into_slot()
    }
}

/// Produces a slot's content from a single static label.
///
/// Implemented for any `Fn(&str) -> impl IntoSlot`.
pub trait LabelProducer {
    fn produce(&self, label: &str) -> Option<Element>;
}

impl<F, R> LabelProducer for F
where
    F: Fn(&str) -> R,
    R: IntoSlot,
{
    fn produce(&self, label: &str) -> Option<Element> {
        self(label).into_slot()
    }
}

/// The slots of a [`Card`], in the order they're produced and laid out.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn name(&self) -> &'static str)]
pub enum CardSlot {
    #[assoc(name = "header")]
    Header,
    #[assoc(name = "image")]
    Image,
    #[assoc(name = "content")]
    Content,
    #[assoc(name = "primary_action")]
    PrimaryAction,
    #[assoc(name = "secondary_action")]
    SecondaryAction,
    #[assoc(name = "link_action")]
    LinkAction,
}

impl CardSlot {
    pub const ORDER: [CardSlot; 6] = [
        CardSlot::Header,
        CardSlot::Image,
        CardSlot::Content,
        CardSlot::PrimaryAction,
        CardSlot::SecondaryAction,
        CardSlot::LinkAction,
    ];
}

impl fmt::Display for CardSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Spacing used by every [`Card`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardLayout {
    /// Between the rows of the card.
    pub spacing: f32,
    /// Between the primary and secondary actions.
    pub action_spacing: f32,
}

pub const CARD_LAYOUT: CardLayout = CardLayout {
    spacing: 16.,
    action_spacing: 8.,
};

/// One producer per [`CardSlot`].
pub struct CardProducers<H, I, C, P, S, L> {
    pub header: H,
    pub image: I,
    pub content: C,
    pub primary_action: P,
    pub secondary_action: S,
    pub link_action: L,
}

/// Static arguments for the slots whose producers only need a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardArgs {
    pub image: SharedString,
    pub primary_label: SharedString,
    pub secondary_label: SharedString,
    pub link_label: SharedString,
}

/// A vertical card: header, image, content, a row with the primary and
/// secondary actions, then a link action.
///
/// The card never knows which components fill its slots. Swapping a producer
/// changes what one slot shows and nothing else.
///
/// # Example
///
/// ```ignore
/// let theme = store.handle();
/// let card = Card::new(
///     CardProducers {
///         header: |title: &str, caption: &str| HeadlineWithCaption::new(&theme, title, caption),
///         image: |source: &str| ImagePlaceholder::new(&theme, source),
///         content: |body: &str, _: &str| Body::new(&theme, body),
///         primary_action: |label: &str| Button::new(&theme).label(label),
///         secondary_action: |label: &str| Button::new(&theme).label(label).role(ButtonRole::Secondary),
///         link_action: |label: &str| Button::new(&theme).label(label).role(ButtonRole::Tertiary),
///     },
///     CardArgs { .. },
/// );
/// ```
pub struct Card<H, I, C, P, S, L> {
    producers: CardProducers<H, I, C, P, S, L>,
    args: CardArgs,
    header: (SharedString, SharedString),
    content: (SharedString, SharedString),
}

impl<H, I, C, P, S, L> Card<H, I, C, P, S, L>
where
    H: TextPairProducer,
    I: LabelProducer,
    C: TextPairProducer,
    P: LabelProducer,
    S: LabelProducer,
    L: LabelProducer,
{
    pub fn new(producers: CardProducers<H, I, C, P, S, L>, args: CardArgs) -> Self {
        Self {
            producers,
            args,
            header: (SharedString::from(""), SharedString::from("")),
            content: (SharedString::from(""), SharedString::from("")),
        }
    }

    pub fn header_text(
        mut self,
        title: impl Into<SharedString>,
        caption: impl Into<SharedString>,
    ) -> Self {
        self.set_header_text(title, caption);
        self
    }

    pub fn content_text(
        mut self,
        body: impl Into<SharedString>,
        caption: impl Into<SharedString>,
    ) -> Self {
        self.set_content_text(body, caption);
        self
    }

    pub fn set_header_text(
        &mut self,
        title: impl Into<SharedString>,
        caption: impl Into<SharedString>,
    ) {
        self.header = (title.into(), caption.into());
    }

    pub fn set_content_text(
        &mut self,
        body: impl Into<SharedString>,
        caption: impl Into<SharedString>,
    ) {
        self.content = (body.into(), caption.into());
    }

    pub fn args(&self) -> &CardArgs {
        &self.args
    }

    /// Calls each producer once, in [`CardSlot::ORDER`], and lays out the results.
    pub fn render(&self) -> Result<Element, ContractViolation> {
        let producers = &self.producers;

        let header = slot(
            CardSlot::Header,
            producers.header.produce(&self.header.0, &self.header.1),
        )?;
        let image = slot(CardSlot::Image, producers.image.produce(&self.args.image))?;
        let content = slot(
            CardSlot::Content,
            producers.content.produce(&self.content.0, &self.content.1),
        )?;
        let primary_action = slot(
            CardSlot::PrimaryAction,
            producers.primary_action.produce(&self.args.primary_label),
        )?;
        let secondary_action = slot(
            CardSlot::SecondaryAction,
            producers
                .secondary_action
                .produce(&self.args.secondary_label),
        )?;
        let link_action = slot(
            CardSlot::LinkAction,
            producers.link_action.produce(&self.args.link_label),
        )?;

        Ok(vstack()
            .spacing(CARD_LAYOUT.spacing)
            .child(header)
            .child(image)
            .child(content)
            .child(
                hstack()
                    .spacing(CARD_LAYOUT.action_spacing)
                    .child(primary_action)
                    .child(secondary_action),
            )
            .child(link_action)
            .into())
    }
}

impl<H, I, C, P, S, L> TryRender for Card<H, I, C, P, S, L>
where
    H: TextPairProducer,
    I: LabelProducer,
    C: TextPairProducer,
    P: LabelProducer,
    S: LabelProducer,
    L: LabelProducer,
{
    fn try_render(&self) -> Result<Element, ContractViolation> {
        self.render()
    }
}

fn slot(slot: CardSlot, produced: Option<Element>) -> Result<Element, ContractViolation> {
    match produced {
        Some(element) => Ok(Element::slot(slot.name(), element)),
        None => Err(ContractViolation::AbsentSlot(slot)),
    }
}
