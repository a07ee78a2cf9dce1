use iced::{
    Length, Theme,
    widget::{Svg, svg},
};
use include_dir::{Dir, include_dir};
use tracing::warn;

static ICONS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets/icons");

const ICON_SIZE: f32 = 16.0;

/// Load one of the bundled SVG icons by file stem, tinted with the theme's text colour.
pub fn icon<'a>(name: &str) -> Svg<'a> {
    let handle = match ICONS.get_file(format!("{name}.svg")) {
        Some(file) => svg::Handle::from_memory(file.contents()),
        None => {
            warn!("Missing icon: {name}");
            svg::Handle::from_memory(&b""[..])
        }
    };

    svg(handle)
        .width(Length::Fixed(ICON_SIZE))
        .height(Length::Fixed(ICON_SIZE))
        .style(|theme: &Theme, _status| svg::Style {
            color: Some(theme.palette().text),
        })
}
