use log::{debug, warn};

use super::session::{Exhaustion, FlowOutcome, FlowPhase, FlowSession, FlowState};
use super::{FlowHost, FlowLink};
use crate::error::LayoutError;
use crate::layout::StyledText;
use crate::units::Pt;

/// Move the text that doesn't fit `container` along its chain of successors.
///
/// Returns the page and container the walk ended on. The state is
/// [`FlowState::Placed`] once a container holds everything it received, or
/// [`FlowState::Exhausted`] if text is left over because the chain ends,
/// points to a container that doesn't exist, or loops back on itself. In the
/// last case the leftover text stays in the final container.
pub fn resolve_overflow<H: FlowHost>(
    host: &mut H,
    container: H::Container,
) -> Result<FlowOutcome<H::Page, H::Container>, LayoutError> {
    let mut session = FlowSession::new(container);
    resolve_overflow_with(host, container, &mut session)
}

/// [`resolve_overflow`] with a caller-provided session, so that several
/// resolutions can share one cycle guard.
pub fn resolve_overflow_with<H: FlowHost>(
    host: &mut H,
    container: H::Container,
    session: &mut FlowSession<H::Page, H::Container>,
) -> Result<FlowOutcome<H::Page, H::Container>, LayoutError> {
    let mut current = container;
    loop {
        session.steps += 1;
        session.phase = FlowPhase::Placing;
        let page = host.page_of(current)?;
        session.result_page = Some(page);

        let overflow = host.measure_overflow(current)?;
        if overflow.is_empty() {
            debug!("{current:?} on {page:?} holds its content");
            return Ok(FlowOutcome {
                page,
                container: current,
                state: FlowState::Placed,
                unplaced: Pt::ZERO,
            });
        }
        session.phase = FlowPhase::Overflowing;
        debug!("{current:?} on {page:?} overflows by {}", overflow.height);

        let reason = match host.next_link(current)? {
            None => Exhaustion::NoSuccessor,
            Some(link) => {
                session.phase = FlowPhase::SeekingSuccessor;
                match seek_successor(host, page, &link) {
                    None => Exhaustion::SuccessorMissing,
                    Some(successor) if !session.visited.insert(successor) => Exhaustion::Cycle,
                    Some(successor) => {
                        let mut moved = overflow.text;
                        if !host.first_column_indent(current)? {
                            if let Some(first) = moved.runs().first() {
                                let spacer = StyledText::column_spacer(first.style);
                                moved.prepend(spacer);
                            }
                        }
                        host.retain_fitting(current)?;
                        host.append_content(successor, moved)?;
                        host.link_back(successor, page, current)?;
                        session.phase = FlowPhase::Done;
                        debug!("moved {} of text from {current:?} to {successor:?}", overflow.height);

                        current = successor;
                        continue;
                    }
                }
            }
        };

        session.phase = FlowPhase::Exhausted;
        warn!(
            "{} of text remain unplaced in {current:?} on {page:?} ({reason:?})",
            overflow.height
        );
        return Ok(FlowOutcome {
            page,
            container: current,
            state: FlowState::Exhausted(reason),
            unplaced: overflow.height,
        });
    }
}

/// Look for the container named by `link`: on the current page, then on the
/// page the link selects, then anywhere in the document.
fn seek_successor<H: FlowHost>(host: &H, page: H::Page, link: &FlowLink) -> Option<H::Container> {
    if let Some(found) = host.lookup_container(&link.container, page) {
        return Some(found);
    }

    if let Some(selector) = &link.page {
        match host.lookup_page(page, selector) {
            Some(target) => {
                if let Some(found) = host.lookup_container(&link.container, target) {
                    debug!("found {:?} on {target:?} via {selector:?}", link.container);
                    return Some(found);
                }
            }
            None => debug!("{selector:?} from {page:?} selects no page"),
        }
    }

    let found = host.deep_find(&link.container);
    match found {
        Some(found) => warn!(
            "{:?} is not on the selected page, using {found:?} found by searching the whole document",
            link.container
        ),
        None => debug!("no container named {:?} in the document", link.container),
    }
    found
}
