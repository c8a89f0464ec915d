use pageflow::flow::PageSelector;
use pageflow::layout::{Margins, StyledText, TextStyle};
use pageflow::units::*;
use pageflow::{pagesize, Document, Page, TextBox};

fn main() {
    pretty_env_logger::init();

    let mut doc = Document::default();
    let body = TextStyle::new(Pt(10.0), 1.4).with_first_line_indent(Pt(12.0));
    let mut text = StyledText::new();
    text.push_str(format!("{}\n", lipsum::lipsum(120)), body);
    text.push_str(lipsum::lipsum(600), body);

    // two columns per page, the right column continues on the next page
    let page_count = 4;
    let mut first = None;
    for index in 1..=page_count {
        let page = doc.add_page(Page::with_margins(pagesize::A5, Margins::all(mm(15.0))));
        let content_box = doc.page(page).expect("page exists").content_box;
        let half = content_box.width() * 0.5;

        let mut left = TextBox::new(format!("left-{index}"), perc(48.0), perc(100.0))
            .with_position(content_box.x1, content_box.y1)
            .with_next(format!("right-{index}"));
        let mut right = TextBox::new(format!("right-{index}"), perc(48.0), perc(100.0))
            .with_position(content_box.x1 + half, content_box.y1);
        if index < page_count {
            right = right
                .with_next(format!("left-{}", index + 1))
                .with_next_page(PageSelector::Next);
        }
        if index == 1 {
            left = left.with_content(text.clone());
        }

        let left = doc.add_container(page, left).expect("unique name");
        doc.add_container(page, right).expect("unique name");
        first.get_or_insert(left);
    }

    let first = first.expect("at least one page");
    let outcome = doc.resolve_overflow(first).expect("chain resolves");
    println!("{outcome:?}");

    for &page in &doc.page_order {
        let page = doc.page(page).expect("page exists");
        println!("{}", page.name.as_deref().unwrap_or_default());
        for &id in page.containers() {
            let context = doc.context_for(id).expect("container is placed");
            let textbox = doc.container(id).expect("container exists");
            let lines = textbox.lines(&context, doc.metrics.as_ref());
            println!(
                "  {:<8} {:>5} chars, {:>3} lines, from {:?}",
                textbox.name,
                textbox.content.char_count(),
                lines.len(),
                textbox.prev_container.map(|prev| doc.containers[prev].name.as_str()),
            );
        }
    }
}
