use id_arena::Id;

use crate::layout::{BaselineGrid, Margins};
use crate::pagesize::Size;
use crate::rect::Rect;
use crate::textbox::TextBox;
use crate::units::RenderContext;

/// A page of the document: its size, margins, baseline grid and the text
/// containers placed on it, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Set when the page is added to a [`Document`](crate::Document) if not given
    pub name: Option<String>,
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    pub margins: Margins,
    /// Grid that container baselines snap to, if the page has one
    pub baseline_grid: Option<BaselineGrid>,
    pub(crate) containers: Vec<Id<TextBox>>,
}

impl Page {
    /// A page without margins and with the default baseline grid
    pub fn new(size: Size) -> Page {
        Page::with_margins(size, Margins::empty())
    }

    pub fn with_margins(size: Size, margins: Margins) -> Page {
        Page {
            name: None,
            media_box: Rect::new(Default::default(), Default::default(), size),
            content_box: margins.content_box(size),
            margins,
            baseline_grid: Some(BaselineGrid::default()),
            containers: Vec::new(),
        }
    }

    pub fn named<S: Into<String>>(mut self, name: S) -> Page {
        self.name = Some(name.into());
        self
    }

    pub fn with_baseline_grid(mut self, grid: Option<BaselineGrid>) -> Page {
        self.baseline_grid = grid;
        self
    }

    pub fn size(&self) -> Size {
        self.media_box.size()
    }

    /// Containers on this page, in the order they were added
    pub fn containers(&self) -> &[Id<TextBox>] {
        &self.containers
    }

    /// The context relative sizes of containers on this page resolve in
    pub fn render_context(&self, defaults: &RenderContext) -> RenderContext {
        RenderContext {
            parent_width: Some(self.content_box.width()),
            parent_height: Some(self.content_box.height()),
            ..*defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{mm, Pt};

    #[test]
    fn content_box_follows_margins() {
        let page = Page::with_margins(Size::new(Pt(600.0), Pt(800.0)), Margins::all(50.0));
        assert_eq!(page.content_box.width(), Pt(500.0));
        let context = page.render_context(&RenderContext::default());
        assert_eq!(context.parent_height, Some(Pt(700.0)));
        assert_eq!(context.font_size, Pt(12.0));
        assert_eq!(page.size(), Size::new(Pt(600.0), Pt(800.0)));

        let page = Page::with_margins(Size::new(Pt(600.0), Pt(800.0)), Margins::all(mm(10.0)));
        assert!(page.content_box.x1.approx_eq(Pt(28.346_472), 1e-9));
    }
}
