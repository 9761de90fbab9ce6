use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use stackdom::{to_html, DefaultTheme, Prop};
use stackui::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("toolbar.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)?;

    // Optional theme overrides: `toolbar theme.json`
    let theme = match std::env::args().nth(1) {
        Some(path) => DefaultTheme::from_json(&std::fs::read_to_string(path)?)?,
        None => DefaultTheme::new(),
    };

    let toolbar = hstack(
        StackProps::new()
            .spacing(Length::Space(3.0))
            .divider(stack_divider(Style::new()))
            .attr("role", "toolbar")
            .children(["Cut", "Copy", "Paste"]),
    );

    let page = vstack(
        StackProps::new()
            .align(Align::Stretch)
            .style(Style::new().set(Prop::Width, Length::FULL))
            .child(Element::text("Editor").tag("h1"))
            .child(toolbar)
            .child(stack(
                StackProps::new()
                    .direction(Responsive::from_breakpoints([
                        (Breakpoint::Base, Direction::Column),
                        (Breakpoint::Md, Direction::Row),
                    ]))
                    .spacing(Responsive::from_breakpoints([
                        (Breakpoint::Base, Length::Space(2.0)),
                        (Breakpoint::Lg, Length::Space(6.0)),
                    ]))
                    .children(["Sidebar", "Document"]),
            )),
    );

    println!("{}", to_html(&page, &theme));
    Ok(())
}
