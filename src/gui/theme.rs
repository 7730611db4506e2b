use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub background: Srgba<f64>,
    pub message: Srgba<f64>,
    pub confirm: Srgba<f64>,
    pub decline: Srgba<f64>,
    pub button_label: Srgba<f64>,
    pub footer: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            background: Self::lookup_color(
                context,
                "theme_bg_color",
                Srgba::new(0.12, 0.12, 0.16, 1.0),
                None,
            ),
            message: Self::lookup_color(
                context,
                "theme_fg_color",
                Srgba::new(0.95, 0.95, 0.95, 1.0),
                None,
            ),
            confirm: Self::lookup_color(
                context,
                "success_bg_color",
                Srgba::new(0.18, 0.62, 0.32, 1.0),
                None,
            ),
            decline: Self::lookup_color(
                context,
                "error_bg_color",
                Srgba::new(0.78, 0.22, 0.22, 1.0),
                None,
            ),
            button_label: Srgba::new(1.0, 1.0, 1.0, 1.0),
            footer: Self::lookup_color(
                context,
                "theme_fg_color",
                Srgba::new(0.95, 0.95, 0.95, 0.45),
                Some(0.45),
            ),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.nudge-window, .nudge-drawing-area {
    background: none;
    background-color: transparent;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
