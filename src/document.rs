use std::collections::HashMap;

use id_arena::{Arena, Id};

use crate::error::LayoutError;
use crate::flow::{self, FlowHost, FlowLink, FlowOutcome, Overflow, PageSelector};
use crate::layout::{
    BaselineGrid, FixedMetrics, GridSnap, LineFeature, StyledText, TextMetrics,
};
use crate::page::Page;
use crate::textbox::TextBox;
use crate::units::{Pt, RenderContext};

/// A document holds the pages in reading order and every text container
/// placed on them. It is the [`FlowHost`] the flow engine runs against.
pub struct Document {
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub containers: Arena<TextBox>,
    container_pages: HashMap<Id<TextBox>, Id<Page>>,
    /// Font measurements used to wrap container content
    pub metrics: Box<dyn TextMetrics>,
    /// Defaults for everything a page doesn't determine, such as the font
    /// size `em` values resolve against
    pub context: RenderContext,
}

impl Default for Document {
    fn default() -> Self {
        Document::with_metrics(FixedMetrics::default())
    }
}

impl Document {
    /// An empty document measuring text with `metrics`
    pub fn with_metrics<M: TextMetrics + 'static>(metrics: M) -> Document {
        Document {
            pages: Arena::new(),
            page_order: Vec::new(),
            containers: Arena::new(),
            container_pages: HashMap::new(),
            metrics: Box::new(metrics),
            context: RenderContext::default(),
        }
    }

    fn alloc_page(&mut self, mut page: Page) -> Id<Page> {
        let next = self.pages.next_id();
        if page.name.is_none() {
            page.name = Some(format!("page-{}", next.index() + 1));
        }
        // containers are only attached through `add_container`
        page.containers.clear();
        self.pages.alloc(page)
    }

    /// Add a page to the document, returning the id of that page within the document.
    /// The page will be added to the end of the document. Pages without a name are
    /// named `page-N`, counting from 1 in the order they are added.
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.alloc_page(page);
        self.page_order.push(id);
        id
    }

    /// Add a page to the document, inserting it before the page identified by `next`.
    /// If there is no page identified by `next`, the page will be added to the end of
    /// the document.
    pub fn insert_page_before_id(&mut self, page: Page, next: Id<Page>) -> Id<Page> {
        let id = self.alloc_page(page);
        match self.index_of_page(next) {
            Some(index) => self.page_order.insert(index, id),
            None => self.page_order.push(id),
        }
        id
    }

    /// Add a page to the document, inserting it after the page identified by `previous`.
    /// If there is no page identified by `previous`, the page will be added to the end
    /// of the document.
    pub fn insert_page_after_id(&mut self, page: Page, previous: Id<Page>) -> Id<Page> {
        let id = self.alloc_page(page);
        match self.index_of_page(previous) {
            Some(index) => self.page_order.insert(index + 1, id),
            None => self.page_order.push(id),
        }
        id
    }

    /// Get the 0-based index of a page given its ID. Note that changing the page order
    /// after this call _will_ invalidate the returned page index
    pub fn index_of_page(&self, page: Id<Page>) -> Option<usize> {
        self.page_order.iter().position(|&p| p == page)
    }

    /// Get the page Id of a page at the given index. Returns [None] if
    /// `page_index >= self.page_order.len()`.
    pub fn id_of_page_index(&self, page_index: usize) -> Option<Id<Page>> {
        self.page_order.get(page_index).copied()
    }

    pub fn page_by_name(&self, name: &str) -> Option<Id<Page>> {
        self.page_order
            .iter()
            .copied()
            .find(|&id| self.pages.get(id).and_then(|p| p.name.as_deref()) == Some(name))
    }

    pub fn page(&self, page: Id<Page>) -> Result<&Page, LayoutError> {
        self.pages
            .get(page)
            .ok_or(LayoutError::PageMissing(page.index()))
    }

    pub fn container(&self, container: Id<TextBox>) -> Result<&TextBox, LayoutError> {
        self.containers
            .get(container)
            .ok_or(LayoutError::ContainerMissing(container.index()))
    }

    pub fn container_mut(&mut self, container: Id<TextBox>) -> Result<&mut TextBox, LayoutError> {
        self.containers
            .get_mut(container)
            .ok_or(LayoutError::ContainerMissing(container.index()))
    }

    /// Place a container on a page. Names must be unique per page.
    pub fn add_container(
        &mut self,
        page: Id<Page>,
        container: TextBox,
    ) -> Result<Id<TextBox>, LayoutError> {
        if self.lookup_container(&container.name, page).is_some() {
            let page = self.page(page)?;
            return Err(LayoutError::DuplicateContainer {
                page: page.name.clone().unwrap_or_default(),
                name: container.name,
            });
        }
        // make sure the page exists before anything is allocated
        self.page(page)?;
        let id = self.containers.alloc(container);
        self.container_pages.insert(id, page);
        if let Some(p) = self.pages.get_mut(page) {
            p.containers.push(id);
        }
        Ok(id)
    }

    /// Render context for a container: the content box of its page plus
    /// the document defaults
    pub fn context_for(&self, container: Id<TextBox>) -> Result<RenderContext, LayoutError> {
        let page = self.page_of(container)?;
        Ok(self.page(page)?.render_context(&self.context))
    }

    /// Distribute the overflow of `container` along its chain, see
    /// [`flow::resolve_overflow`]
    pub fn resolve_overflow(
        &mut self,
        container: Id<TextBox>,
    ) -> Result<FlowOutcome<Id<Page>, Id<TextBox>>, LayoutError> {
        flow::resolve_overflow(self, container)
    }

    /// Whether the container holds more text than fits
    pub fn is_overflowing(&self, container: Id<TextBox>) -> Result<bool, LayoutError> {
        Ok(!self.measure_overflow(container)?.is_empty())
    }

    /// The content of a container that doesn't fit it
    pub fn overflow(&self, container: Id<TextBox>) -> Result<StyledText, LayoutError> {
        Ok(self.measure_overflow(container)?.text)
    }

    fn grid_for(&self, container: Id<TextBox>) -> Result<BaselineGrid, LayoutError> {
        let page = self.page(self.page_of(container)?)?;
        page.baseline_grid
            .ok_or_else(|| LayoutError::NoBaselineGrid(page.name.clone().unwrap_or_default()))
    }

    /// Move a container so that `feature` of line `index` lands on the
    /// baseline grid of its page. Returns how far the container moved down.
    pub fn snap_to_grid(
        &mut self,
        container: Id<TextBox>,
        index: usize,
        feature: LineFeature,
        snap: GridSnap,
    ) -> Result<Pt, LayoutError> {
        let grid = self.grid_for(container)?;
        let context = self.context_for(container)?;
        let metrics = self.metrics.as_ref();
        let textbox = self
            .containers
            .get_mut(container)
            .ok_or(LayoutError::ContainerMissing(container.index()))?;
        textbox.snap_to_grid(index, feature, snap, &grid, &context, metrics)
    }

    /// Whether the baseline of line `index` of a container is on its page's grid
    pub fn baseline_on_grid(
        &self,
        container: Id<TextBox>,
        index: usize,
        tolerance: Pt,
    ) -> Result<bool, LayoutError> {
        let grid = self.grid_for(container)?;
        let context = self.context_for(container)?;
        self.container(container)?.baseline_on_grid(
            index,
            tolerance,
            &grid,
            &context,
            self.metrics.as_ref(),
        )
    }

    /// Move a container up so that the baseline of line `index` is where
    /// its top was
    pub fn baseline_to_top(
        &mut self,
        container: Id<TextBox>,
        index: usize,
    ) -> Result<Pt, LayoutError> {
        let context = self.context_for(container)?;
        let metrics = self.metrics.as_ref();
        let textbox = self
            .containers
            .get_mut(container)
            .ok_or(LayoutError::ContainerMissing(container.index()))?;
        textbox.baseline_to_top(index, &context, metrics)
    }
}

impl FlowHost for Document {
    type Page = Id<Page>;
    type Container = Id<TextBox>;

    fn page_of(&self, container: Id<TextBox>) -> Result<Id<Page>, LayoutError> {
        self.container_pages
            .get(&container)
            .copied()
            .ok_or(LayoutError::ContainerMissing(container.index()))
    }

    fn next_link(&self, container: Id<TextBox>) -> Result<Option<FlowLink>, LayoutError> {
        Ok(self.container(container)?.next_link())
    }

    fn first_column_indent(&self, container: Id<TextBox>) -> Result<bool, LayoutError> {
        Ok(self.container(container)?.first_column_indent)
    }

    fn lookup_container(&self, name: &str, page: Id<Page>) -> Option<Id<TextBox>> {
        self.pages.get(page)?.containers.iter().copied().find(|&id| {
            self.containers
                .get(id)
                .is_some_and(|textbox| textbox.name == name)
        })
    }

    fn lookup_page(&self, from: Id<Page>, selector: &PageSelector) -> Option<Id<Page>> {
        let current = self.index_of_page(from)?;
        match selector {
            PageSelector::Next => self.id_of_page_index(current + 1),
            PageSelector::Offset(offset) => {
                self.id_of_page_index(current.checked_add_signed(*offset)?)
            }
            PageSelector::Index(index) => self.id_of_page_index(*index),
            PageSelector::Named(name) => self.page_by_name(name),
        }
    }

    /// First container with this name, in page order
    fn deep_find(&self, name: &str) -> Option<Id<TextBox>> {
        self.page_order
            .iter()
            .find_map(|&page| self.lookup_container(name, page))
    }

    fn measure_overflow(&self, container: Id<TextBox>) -> Result<Overflow, LayoutError> {
        let context = self.context_for(container)?;
        let textbox = self.container(container)?;
        let width = textbox.committed_width(&context);
        Ok(textbox.measure_overflow(width, &context, self.metrics.as_ref()))
    }

    fn retain_fitting(&mut self, container: Id<TextBox>) -> Result<(), LayoutError> {
        let context = self.context_for(container)?;
        let metrics = self.metrics.as_ref();
        let textbox = self
            .containers
            .get_mut(container)
            .ok_or(LayoutError::ContainerMissing(container.index()))?;
        let width = textbox.committed_width(&context);
        textbox.retain_fitting(width, &context, metrics);
        Ok(())
    }

    fn append_content(
        &mut self,
        container: Id<TextBox>,
        text: StyledText,
    ) -> Result<(), LayoutError> {
        self.container_mut(container)?.append_content(text);
        Ok(())
    }

    fn link_back(
        &mut self,
        container: Id<TextBox>,
        prev_page: Id<Page>,
        prev_container: Id<TextBox>,
    ) -> Result<(), LayoutError> {
        let textbox = self.container_mut(container)?;
        textbox.prev_page = Some(prev_page);
        textbox.prev_container = Some(prev_container);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Margins;
    use crate::pagesize::{self, Size};
    use crate::units::{perc, pt};

    #[test]
    fn pages_are_named_in_order_of_addition() {
        let mut doc = Document::default();
        let first = doc.add_page(Page::new(pagesize::A4));
        let named = doc.add_page(Page::new(pagesize::A4).named("back"));
        let inserted = doc.insert_page_before_id(Page::new(pagesize::A4), named);
        assert_eq!(doc.page(first).unwrap().name.as_deref(), Some("page-1"));
        assert_eq!(doc.page(inserted).unwrap().name.as_deref(), Some("page-3"));
        assert_eq!(doc.page_order, vec![first, inserted, named]);
        assert_eq!(doc.page_by_name("back"), Some(named));
        assert_eq!(doc.page_by_name("page-3"), Some(inserted));

        let after = doc.insert_page_after_id(Page::new(pagesize::A4), named);
        assert_eq!(doc.index_of_page(after), Some(3));
    }

    #[test]
    fn page_selectors() {
        let mut doc = Document::default();
        let pages: Vec<_> = (0..4)
            .map(|_| doc.add_page(Page::new(pagesize::A5)))
            .collect();
        assert_eq!(doc.lookup_page(pages[1], &PageSelector::Next), Some(pages[2]));
        assert_eq!(doc.lookup_page(pages[3], &PageSelector::Next), None);
        assert_eq!(doc.lookup_page(pages[1], &PageSelector::Offset(2)), Some(pages[3]));
        assert_eq!(doc.lookup_page(pages[1], &PageSelector::Offset(-1)), Some(pages[0]));
        assert_eq!(doc.lookup_page(pages[1], &PageSelector::Offset(-2)), None);
        assert_eq!(doc.lookup_page(pages[3], &PageSelector::Index(0)), Some(pages[0]));
        assert_eq!(
            doc.lookup_page(pages[0], &PageSelector::Named("page-4".into())),
            Some(pages[3])
        );
    }

    #[test]
    fn container_names_are_unique_per_page() {
        let mut doc = Document::default();
        let one = doc.add_page(Page::new(pagesize::A5));
        let two = doc.add_page(Page::new(pagesize::A5));
        doc.add_container(one, TextBox::elastic("body", pt(100.0))).unwrap();
        doc.add_container(two, TextBox::elastic("body", pt(100.0))).unwrap();
        assert_eq!(
            doc.add_container(one, TextBox::elastic("body", pt(50.0))),
            Err(LayoutError::DuplicateContainer {
                page: "page-1".into(),
                name: "body".into()
            })
        );
        assert_eq!(doc.page(one).unwrap().containers().len(), 1);
    }

    #[test]
    fn relative_containers_resolve_against_the_content_box() {
        let mut doc = Document::default();
        let page = doc.add_page(Page::with_margins(
            Size::new(Pt(300.0), Pt(500.0)),
            Margins::all(50.0),
        ));
        let id = doc
            .add_container(page, TextBox::new("body", perc(50.0), perc(100.0)))
            .unwrap();
        let context = doc.context_for(id).unwrap();
        let textbox = doc.container(id).unwrap();
        assert_eq!(textbox.committed_width(&context), Pt(100.0));
        assert_eq!(textbox.committed_height(&context), Some(Pt(400.0)));
    }

    #[test]
    fn pages_without_a_grid_can_not_snap() {
        let mut doc = Document::default();
        let page = doc.add_page(Page::new(pagesize::A5).with_baseline_grid(None));
        let id = doc
            .add_container(page, TextBox::elastic("body", pt(100.0)).with_content("text"))
            .unwrap();
        assert_eq!(
            doc.snap_to_grid(id, 0, LineFeature::Baseline, GridSnap::Round),
            Err(LayoutError::NoBaselineGrid("page-1".into()))
        );
    }
}
