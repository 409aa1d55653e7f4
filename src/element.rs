//! The renderable description produced by components.
//!
//! Nothing here draws. A host UI framework walks an [`Element`] tree and
//! turns it into pixels however it likes.

use tesserae_theme::{Rgba, SharedString, TextRole, Typeface};

use crate::{ContractViolation, theme::ButtonRole};

/// Anything that can describe itself as an [`Element`] from the current theme.
pub trait Render {
    fn render(&self) -> Element;
}

/// Like [`Render`], for views whose render pass can be rejected.
pub trait TryRender {
    fn try_render(&self) -> Result<Element, ContractViolation>;
}

impl<R: Render> TryRender for R {
    fn try_render(&self) -> Result<Element, ContractViolation> {
        Ok(self.render())
    }
}

impl Render for Element {
    fn render(&self) -> Element {
        self.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text(TextElement),
    Button(ButtonElement),
    Image(ImageElement),
    Stack(StackElement),
    Slot(SlotElement),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub content: SharedString,
    pub role: TextRole,
    pub typeface: Typeface,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonElement {
    pub label: SharedString,
    pub role: ButtonRole,
    pub typeface: Typeface,
    pub foreground: Rgba,
    pub background: Rgba,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    pub source: SharedString,
    pub background: Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StackElement {
    pub axis: Axis,
    pub spacing: f32,
    pub children: Vec<Element>,
}

/// A named position in a container, wrapping whatever was produced for it.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotElement {
    pub name: &'static str,
    pub child: Box<Element>,
}

/// Creates an empty vertical stack.
pub fn vstack() -> StackElement {
    StackElement::new(Axis::Vertical)
}

/// Creates an empty horizontal stack.
pub fn hstack() -> StackElement {
    StackElement::new(Axis::Horizontal)
}

impl StackElement {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            spacing: 0.,
            children: Vec::new(),
        }
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }
}

/// The shape of an element tree with all leaf content erased.
///
/// Slots are kept by name only, so two trees whose slots hold different
/// components still have equal layouts.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutNode {
    Leaf,
    Slot(&'static str),
    Stack {
        axis: Axis,
        spacing: f32,
        children: Vec<LayoutNode>,
    },
}

impl Element {
    pub fn slot(name: &'static str, child: impl Into<Element>) -> Self {
        Element::Slot(SlotElement {
            name,
            child: Box::new(child.into()),
        })
    }

    pub fn layout(&self) -> LayoutNode {
        match self {
            Element::Text(_) | Element::Button(_) | Element::Image(_) => LayoutNode::Leaf,
            Element::Slot(slot) => LayoutNode::Slot(slot.name),
            Element::Stack(stack) => LayoutNode::Stack {
                axis: stack.axis,
                spacing: stack.spacing,
                children: stack.children.iter().map(Element::layout).collect(),
            },
        }
    }

    /// Slot names in the order they appear, depth first.
    pub fn slot_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        self.walk(&mut |element| {
            if let Element::Slot(slot) = element {
                names.push(slot.name);
            }
        });
        names
    }

    /// Finds the content of the slot called `name`.
    pub fn find_slot(&self, name: &str) -> Option<&Element> {
        match self {
            Element::Slot(slot) if slot.name == name => Some(slot.child.as_ref()),
            Element::Slot(slot) => slot.child.find_slot(name),
            Element::Stack(stack) => stack.children.iter().find_map(|child| child.find_slot(name)),
            _ => None,
        }
    }

    /// Every text element in the tree, depth first.
    pub fn texts(&self) -> Vec<&TextElement> {
        let mut texts = Vec::new();
        self.collect_texts(&mut texts);
        texts
    }

    fn collect_texts<'a>(&'a self, texts: &mut Vec<&'a TextElement>) {
        match self {
            Element::Text(text) => texts.push(text),
            Element::Slot(slot) => slot.child.collect_texts(texts),
            Element::Stack(stack) => stack
                .children
                .iter()
                .for_each(|child| child.collect_texts(texts)),
            Element::Button(_) | Element::Image(_) => {}
        }
    }

    fn walk(&self, visit: &mut impl FnMut(&Element)) {
        visit(self);

        match self {
            Element::Slot(slot) => slot.child.walk(visit),
            Element::Stack(stack) => stack.children.iter().for_each(|child| child.walk(visit)),
            Element::Text(_) | Element::Button(_) | Element::Image(_) => {}
        }
    }
}

macro_rules! impl_into_element {
    ( $( [$ty:ty, $variant:ident] ),+ ) => {
        $(
            impl From<$ty> for Element {
                fn from(value: $ty) -> Self {
                    Element::$variant(value)
                }
            }
        )+
    };
}

impl_into_element!(
    [TextElement, Text],
    [ButtonElement, Button],
    [ImageElement, Image],
    [StackElement, Stack],
    [SlotElement, Slot]
);
