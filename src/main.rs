//! fltkit demo - a window with a button, a label and a recycling table
//!
//! Runs against the headless backend, so it works without a display and
//! reports what it built in the log.

use std::cell::RefCell;
use std::rc::Rc;

use fltkit::bridge::HeadlessToolkit;
use fltkit::log::default_log_path;
use fltkit::uikit::{
    CellRef, DataSource, Delegate, ReusePool, TableView, UIButton, UILabel, UIWindow,
};
use fltkit::{log, Color, Kit, Rect, ToolkitHandle};

const WIDTH: i32 = 600;
const HEIGHT: i32 = 400;
const CELL_ID: &str = "fruit";

/// Static list backing the demo table
struct Fruits {
    names: Vec<&'static str>,
}

impl DataSource for Fruits {
    fn number_of_rows(&mut self) -> i32 {
        self.names.len() as i32
    }

    fn cell_for_row(&mut self, pool: &mut ReusePool, row: i32) -> Option<CellRef> {
        let name = self.names.get(usize::try_from(row).ok()?)?;
        let cell = pool.dequeue(CELL_ID);
        cell.borrow_mut().text = Some(name.to_string());
        Some(cell)
    }
}

struct PrintSelection;

impl Delegate for PrintSelection {
    fn did_select_row(&mut self, row: i32) {
        log!("Selected row {}", row);
    }
}

fn main() {
    fltkit::log::init(&default_log_path());
    log!("main() starting");

    let toolkit: ToolkitHandle = Rc::new(HeadlessToolkit::new());
    let kit = match Kit::setup(toolkit, None) {
        Ok(kit) => kit,
        Err(e) => {
            eprintln!("fltkit: setup failed: {}", e);
            std::process::exit(1);
        }
    };

    match kit.supported_libraries() {
        Ok(libs) => {
            for (name, bundles) in &libs {
                log!("Bundle {}: {} targets", name, bundles.len());
            }
        }
        Err(e) => log!("Failed to list bundles: {}", e),
    }

    let result = kit.run(|kit| {
        let window = UIWindow::with_config(
            kit.toolkit.clone(),
            &kit.config,
            WIDTH,
            HEIGHT,
            "Hello fltkit",
        );

        let label = UILabel::new(kit.toolkit.clone(), Some(Rect::new(20, 70, 200, 30)), "");
        label.set_text_color(kit.palette.foreground());

        let button = UIButton::new(
            kit.toolkit.clone(),
            Some(Rect::new(20, 20, 200, 40)),
            "Hello World",
        );
        button.set_background_color("#42A5F5".parse().unwrap_or(Color::WHITE));
        button.on_touch_up_inside(|| log!("Hello, FLTK + Rust"));

        window.add_subview(&button);
        window.add_subview(&label);

        let frame = Rect::new(20, 110, 560, 270);
        match TableView::create_with_config(&kit.toolkit, frame, &kit.config) {
            Ok(table) => {
                let fruits = Rc::new(RefCell::new(Fruits {
                    names: vec!["apple", "banana", "cherry", "date", "elderberry"],
                }));
                let mut table = table.borrow_mut();
                table.set_data_source(fruits);
                table.set_delegate(Rc::new(RefCell::new(PrintSelection)));
                table.reload_data();
                label.set_text("5 fruits");
            }
            Err(e) => label.set_text(&e.to_string()),
        }

        window.show();
    });

    if let Err(e) = result {
        log!("Event loop failed: {}", e);
    }
    log!("main() exiting");
    fltkit::log::shutdown();
}
