use std::cell::RefCell;
use std::rc::Rc;

use virtual_viewport::{
    ContentTransform, ElementSize, FixedSizeStrategy, ForOfOptions, Orientation, ScrollBehavior,
    ScrollElement, ViewContext, ViewRenderer, ViewportOptions, VirtualForOf,
    VirtualScrollViewport,
};

/// A scroll container backed by plain fields, standing in for a DOM node.
#[derive(Debug, Default)]
struct MemoryElement {
    client: ElementSize,
    spacer: f64,
    scroll_top: f64,
    transform: String,
}

impl ScrollElement for MemoryElement {
    fn client_size(&self) -> ElementSize {
        self.client
    }

    fn scroll_size(&self) -> ElementSize {
        ElementSize::new(self.client.width, self.spacer.max(self.client.height))
    }

    fn scroll_offset(&self, _orientation: Orientation) -> f64 {
        self.scroll_top
    }

    fn set_scroll_offset(&mut self, _orientation: Orientation, offset: f64) {
        let max = (self.spacer - self.client.height).max(0.0);
        self.scroll_top = offset.clamp(0.0, max);
    }

    fn rendered_content_size(&self) -> ElementSize {
        ElementSize::default()
    }

    fn set_content_transform(&mut self, transform: &ContentTransform) {
        self.transform = transform.to_string();
    }

    fn set_spacer_size(&mut self, _orientation: Orientation, size: f64) {
        self.spacer = size;
    }
}

/// Renders each row to a line of text.
#[derive(Default)]
struct TextRows {
    created: usize,
}

impl ViewRenderer<String> for TextRows {
    type View = String;

    fn create_view(&mut self, context: &ViewContext<String>) -> String {
        self.created += 1;
        format!("#{:<4} {}", context.index, context.item)
    }

    fn bind_view(&mut self, view: &mut String, context: &ViewContext<String>) {
        *view = format!("#{:<4} {}", context.index, context.item);
    }

    fn view_extent(&self, _view: &String, _orientation: Orientation) -> f64 {
        24.0
    }
}

type Rows = VirtualForOf<String, String, TextRows>;

fn print_frame(viewport: &VirtualScrollViewport<FixedSizeStrategy, MemoryElement>, rows: &Rows) {
    println!(
        "range={} transform={:?} spacer={}",
        viewport.rendered_range(),
        viewport.element().transform,
        viewport.element().spacer
    );
    for row in rows.views() {
        println!("  {row}");
    }
}

fn main() -> Result<(), virtual_viewport::ViewportError> {
    let element = MemoryElement {
        client: ElementSize::new(320.0, 96.0),
        ..MemoryElement::default()
    };
    let mut viewport = VirtualScrollViewport::new(
        element,
        FixedSizeStrategy::new(24.0, 1)?,
        ViewportOptions::default(),
    );

    let rows: Rc<RefCell<Rows>> = Rc::new(RefCell::new(VirtualForOf::new(
        TextRows::default(),
        ForOfOptions::new().with_template_cache_size(8),
    )));
    rows.borrow_mut()
        .set_source((0..10_000).map(|i| format!("row {i}")).collect::<Vec<_>>());
    viewport.attach(rows.clone())?;

    viewport.scrolled_index_stream().subscribe(|index| {
        println!("first visible index -> {index}");
    });

    // Frame 0: first measurement and render.
    let mut now_ms = 0;
    viewport.tick(now_ms);
    print_frame(&viewport, &rows.borrow());

    // A burst of scroll events collapses into one recompute per frame.
    for offset in [30.0, 60.0, 90.0] {
        viewport
            .element_mut()
            .set_scroll_offset(Orientation::Vertical, offset);
        viewport.on_scroll();
    }
    now_ms += 16;
    viewport.tick(now_ms);
    print_frame(&viewport, &rows.borrow());

    viewport.scroll_to_index(5_000, ScrollBehavior::Instant);
    viewport.on_scroll();
    now_ms += 16;
    viewport.tick(now_ms);
    print_frame(&viewport, &rows.borrow());
    println!("views created so far: {}", rows.borrow().renderer().created);

    viewport.detach();
    rows.borrow_mut().destroy();
    Ok(())
}
