use super::model::{PromptState, Rect};
use super::{
    BUTTON_CORNER_RADIUS, BUTTON_FONT_SIZE, FOOTER_FONT_SIZE, FOOTER_MARGIN, MESSAGE_FONT_SIZE,
};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use palette::Srgba;
use std::f64::consts::PI;

struct ButtonRenderer<'a> {
    rect: Rect,
    label: &'a str,
    fill: Srgba<f64>,
}

impl<'a> ButtonRenderer<'a> {
    fn new(rect: Rect, label: &'a str, fill: Srgba<f64>) -> Self {
        Self { rect, label, fill }
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let (r, g, b, a) = self.fill.into_components();
        cr.set_source_rgba(r, g, b, a);
        rounded_rect(cr, self.rect, BUTTON_CORNER_RADIUS);
        cr.fill()?;

        let (r, g, b, a) = colors.button_label.into_components();
        cr.set_source_rgba(r, g, b, a);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        cr.set_font_size(BUTTON_FONT_SIZE);
        if let Ok(ext) = cr.text_extents(self.label) {
            cr.move_to(
                self.rect.x + self.rect.width / 2.0 - ext.width() / 2.0,
                self.rect.y + self.rect.height / 2.0 + ext.height() / 2.0,
            );
            cr.show_text(self.label)?;
        }
        Ok(())
    }
}

fn rounded_rect(cr: &Context, rect: Rect, radius: f64) {
    let (x, y, w, h) = (rect.x, rect.y, rect.width, rect.height);
    cr.new_sub_path();
    cr.arc(x + w - radius, y + radius, radius, -PI / 2.0, 0.0);
    cr.arc(x + w - radius, y + h - radius, radius, 0.0, PI / 2.0);
    cr.arc(x + radius, y + h - radius, radius, PI / 2.0, PI);
    cr.arc(x + radius, y + radius, radius, PI, 3.0 * PI / 2.0);
    cr.close_path();
}

pub fn draw(cr: &Context, state: &PromptState, colors: &ThemeColors) -> Result<(), cairo::Error> {
    draw_background(cr, state, colors)?;

    if let Some(greeting) = &state.greeting {
        draw_message(cr, state, colors, greeting)?;
        if state.confetti_active {
            state.confetti.draw(cr)?;
        }
    } else {
        draw_message(cr, state, colors, "Click Yes or No")?;
        ButtonRenderer::new(state.confirm_rect(), "Yes", colors.confirm).draw(cr, colors)?;
        ButtonRenderer::new(state.evade_rect(), "No", colors.decline).draw(cr, colors)?;
    }

    draw_footer(cr, state, colors)
}

fn draw_background(
    cr: &Context,
    state: &PromptState,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let (r, g, b, a) = colors.background.into_components();
    cr.set_source_rgba(r, g, b, a);
    cr.rectangle(0.0, 0.0, state.viewport.width, state.viewport.height);
    cr.fill()
}

fn draw_message(
    cr: &Context,
    state: &PromptState,
    colors: &ThemeColors,
    text: &str,
) -> Result<(), cairo::Error> {
    let (r, g, b, a) = colors.message.into_components();
    cr.set_source_rgba(r, g, b, a);
    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    cr.set_font_size(MESSAGE_FONT_SIZE);
    if let Ok(ext) = cr.text_extents(text) {
        cr.move_to(
            state.viewport.width / 2.0 - ext.width() / 2.0,
            state.viewport.height / 4.0,
        );
        cr.show_text(text)?;
    }
    Ok(())
}

fn draw_footer(
    cr: &Context,
    state: &PromptState,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let text = "made with nudge";
    let (r, g, b, a) = colors.footer.into_components();
    cr.set_source_rgba(r, g, b, a);
    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
    cr.set_font_size(FOOTER_FONT_SIZE);
    if let Ok(ext) = cr.text_extents(text) {
        cr.move_to(
            state.viewport.width / 2.0 - ext.width() / 2.0,
            state.viewport.height - FOOTER_MARGIN,
        );
        cr.show_text(text)?;
    }
    Ok(())
}
