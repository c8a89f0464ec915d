use id_arena::Id;

use crate::error::{LayoutError, UnitError};
use crate::flow::{FlowLink, Overflow, PageSelector};
use crate::layout::{
    layout_lines, overflow_cursor, text_height, BaselineGrid, GridSnap, LineFeature, StyledText,
    TextLine, TextMetrics,
};
use crate::pagesize::Size;
use crate::page::Page;
use crate::units::{parse, Axis, Pt, RenderContext, UnitValue};

/// A named rectangle on a page that holds styled text and may pass the
/// text it can't hold on to a successor.
///
/// Width and height may be relative; they are resolved against the content
/// box of the page when the box is measured. A box without a height is
/// elastic and never overflows.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    pub name: String,
    pub width: Option<UnitValue>,
    pub height: Option<UnitValue>,
    /// Offset of the top edge from the top of the page
    pub top: Pt,
    /// Offset of the left edge from the left of the page
    pub left: Pt,
    pub content: StyledText,
    /// Name of the container that receives the overflow
    pub next_container: Option<String>,
    /// Page to look for `next_container` on when it isn't on this page
    pub next_page: Option<PageSelector>,
    /// Whether text continued from a previous container may start with a
    /// first-line indent. When unset, a hair spacer suppresses the indent.
    pub first_column_indent: bool,
    pub prev_page: Option<Id<Page>>,
    pub prev_container: Option<Id<TextBox>>,
}

impl TextBox {
    pub fn new<S, W, H>(name: S, width: W, height: H) -> TextBox
    where
        S: Into<String>,
        W: Into<UnitValue>,
        H: Into<UnitValue>,
    {
        TextBox {
            height: Some(height.into()),
            ..TextBox::elastic(name, width)
        }
    }

    /// A box that grows to fit its content
    pub fn elastic<S: Into<String>, W: Into<UnitValue>>(name: S, width: W) -> TextBox {
        TextBox {
            name: name.into(),
            width: Some(width.into()),
            height: None,
            top: Pt::ZERO,
            left: Pt::ZERO,
            content: StyledText::new(),
            next_container: None,
            next_page: None,
            first_column_indent: false,
            prev_page: None,
            prev_container: None,
        }
    }

    /// Build a box from unit tokens, e.g. `("main", "50%", Some("120mm"))`
    pub fn from_tokens<S: Into<String>>(
        name: S,
        width: &str,
        height: Option<&str>,
    ) -> Result<TextBox, UnitError> {
        let mut textbox = TextBox::elastic(name, parse(width)?);
        textbox.height = height.map(parse).transpose()?;
        Ok(textbox)
    }

    pub fn with_position(mut self, left: Pt, top: Pt) -> TextBox {
        self.left = left;
        self.top = top;
        self
    }

    pub fn with_content<T: Into<StyledText>>(mut self, content: T) -> TextBox {
        self.content = content.into();
        self
    }

    /// Send the overflow to the container named `name`
    pub fn with_next<S: Into<String>>(mut self, name: S) -> TextBox {
        self.next_container = Some(name.into());
        self
    }

    pub fn with_next_page(mut self, selector: PageSelector) -> TextBox {
        self.next_page = Some(selector);
        self
    }

    pub fn with_first_column_indent(mut self, indent: bool) -> TextBox {
        self.first_column_indent = indent;
        self
    }

    pub fn is_elastic(&self) -> bool {
        self.height.is_none()
    }

    pub fn next_link(&self) -> Option<FlowLink> {
        self.next_container.as_ref().map(|name| FlowLink {
            container: name.clone(),
            page: self.next_page.clone(),
        })
    }

    /// Width in points in `context`; a box without a width takes the full
    /// parent width, or is unbounded if that isn't known either.
    pub fn committed_width(&self, context: &RenderContext) -> Pt {
        match &self.width {
            Some(width) => width.anchored(Axis::Horizontal).render_in(context),
            None => context.parent_width.unwrap_or(Pt(f64::INFINITY)),
        }
    }

    /// Height in points in `context`, `None` when elastic
    pub fn committed_height(&self, context: &RenderContext) -> Option<Pt> {
        self.height
            .map(|height| height.anchored(Axis::Vertical).render_in(context))
    }

    /// Lines of the content wrapped to the committed width
    pub fn lines(&self, context: &RenderContext, metrics: &dyn TextMetrics) -> Vec<TextLine> {
        layout_lines(&self.content, self.committed_width(context), metrics)
    }

    /// The content that doesn't fit the box when wrapped to `width`
    pub fn measure_overflow(
        &self,
        width: Pt,
        context: &RenderContext,
        metrics: &dyn TextMetrics,
    ) -> Overflow {
        let Some(height) = self.committed_height(context) else {
            return Overflow::default();
        };
        let lines = layout_lines(&self.content, width, metrics);
        match overflow_cursor(&lines, height) {
            Some(cursor) => {
                let text = self.content.tail(cursor);
                let height = text.height(width, metrics);
                Overflow { text, height }
            }
            None => Overflow::default(),
        }
    }

    /// Drop the content that doesn't fit the box when wrapped to `width`
    pub fn retain_fitting(&mut self, width: Pt, context: &RenderContext, metrics: &dyn TextMetrics) {
        let Some(height) = self.committed_height(context) else {
            return;
        };
        let lines = layout_lines(&self.content, width, metrics);
        if let Some(cursor) = overflow_cursor(&lines, height) {
            self.content.truncate(cursor);
        }
    }

    pub fn append_content(&mut self, text: StyledText) {
        self.content.append(text);
    }

    /// The size the box would need to show all its content at `width`
    pub fn size_for_width(&self, width: Pt, metrics: &dyn TextMetrics) -> Size {
        Size::new(width, text_height(&layout_lines(&self.content, width, metrics)))
    }

    fn line(&self, lines: &[TextLine], index: usize) -> Result<TextLine, LayoutError> {
        lines.get(index).cloned().ok_or_else(|| LayoutError::LineIndex {
            container: self.name.clone(),
            index,
            lines: lines.len(),
        })
    }

    /// Move the box vertically so that `feature` of line `index` lands on
    /// the grid. Returns the distance the box moved, positive downwards.
    pub fn snap_to_grid(
        &mut self,
        index: usize,
        feature: LineFeature,
        snap: GridSnap,
        grid: &BaselineGrid,
        context: &RenderContext,
        metrics: &dyn TextMetrics,
    ) -> Result<Pt, LayoutError> {
        let line = self.line(&self.lines(context, metrics), index)?;
        let offset = grid.snap_offset(self.top + feature.position(&line), snap);
        self.top += offset;
        Ok(offset)
    }

    /// Whether the baseline of line `index` is within `tolerance` of the grid
    pub fn baseline_on_grid(
        &self,
        index: usize,
        tolerance: Pt,
        grid: &BaselineGrid,
        context: &RenderContext,
        metrics: &dyn TextMetrics,
    ) -> Result<bool, LayoutError> {
        let line = self.line(&self.lines(context, metrics), index)?;
        Ok(grid.is_on_grid(self.top + line.baseline, tolerance))
    }

    /// Move the box up so that the baseline of line `index` is where the top
    /// of the box was. Returns the distance moved.
    pub fn baseline_to_top(
        &mut self,
        index: usize,
        context: &RenderContext,
        metrics: &dyn TextMetrics,
    ) -> Result<Pt, LayoutError> {
        let line = self.line(&self.lines(context, metrics), index)?;
        self.top -= line.baseline;
        Ok(-line.baseline)
    }
}
