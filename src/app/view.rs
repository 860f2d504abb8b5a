use super::messages::Message;
use super::state::{App, Session};
use crate::icons::IconFormat;
use crate::toolbar::markup::render_markup;
use crate::toolbar::{ControlGroup, ControlId, DigitColor, Entry, Glyph, Item, ToolbarKind};
use iced::alignment::Vertical;
use iced::font::Weight;
use iced::widget::{
    button, column, container, image, mouse_area, row, svg, text, text_input, tooltip,
    vertical_rule, Row,
};
use iced::{Color, Element, Font, Length, Theme};

const ICON_SIZE: f32 = 24.0;
const LABEL_SIZE: f32 = 14.0;
const LARGE_LABEL_SIZE: f32 = 18.0;
const SEPARATOR_WIDTH: f32 = 1.0;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let mut tabs = Row::new().spacing(4).align_y(Vertical::Center);
        for kind in ToolbarKind::ALL {
            let style: fn(&Theme, button::Status) -> button::Style = if kind == self.active_toolbar {
                button::primary
            } else {
                button::secondary
            };
            tabs = tabs.push(
                button(text(kind.to_string()).size(LABEL_SIZE))
                    .style(style)
                    .on_press(Message::SelectToolbar(kind)),
            );
        }

        let mut main_strip = row![tabs].spacing(12).align_y(Vertical::Center);
        if let Some(alternate) = self.toolbars.alternate() {
            main_strip = main_strip.push(self.group_row(alternate));
        }

        let active = self.group_row(self.toolbars.group(self.active_toolbar));

        let expression = text_input("Expression", &self.session.expression)
            .on_input(Message::ExpressionEdited)
            .width(Length::Fill);

        let mut layout = column![main_strip, active].padding(12).spacing(10);
        if let Some(menu) = self.open_menu.and_then(|id| self.menu_strip(id)) {
            layout = layout.push(menu);
        }
        layout
            .push(expression)
            .push(self.digit_preview())
            .push(self.status_line())
            .into()
    }

    fn group_row<'a>(&'a self, group: &'a ControlGroup<Session>) -> Row<'a, Message> {
        group
            .iter()
            .fold(Row::new().spacing(4).align_y(Vertical::Center), |strip, entry| {
                strip.push(self.control(entry))
            })
    }

    fn control<'a>(&'a self, entry: &'a Entry<Session>) -> Element<'a, Message> {
        let (glyph, tip) = match entry.item() {
            Item::Separator => return vertical_rule(SEPARATOR_WIDTH).into(),
            Item::Static(control) => (control.glyph(), control.tooltip()),
            Item::Cyclic(control) => (control.current().glyph(), control.current().tooltip()),
        };
        let id = entry.id();
        let face = button(self.glyph(glyph))
            .style(button::text)
            .padding(6)
            .on_press(Message::Activate(id));
        let face = mouse_area(face).on_right_press(Message::OpenMenu(id));

        tooltip(
            face,
            container(text(tip.to_string()).size(LABEL_SIZE))
                .padding(4)
                .style(container::rounded_box),
            tooltip::Position::Bottom,
        )
        .into()
    }

    fn glyph<'a>(&'a self, glyph: &'a Glyph) -> Element<'a, Message> {
        match glyph {
            Glyph::Icon(name) => match self.icons.lookup(name) {
                Some((path, IconFormat::Svg)) => svg(svg::Handle::from_path(path))
                    .width(ICON_SIZE)
                    .height(ICON_SIZE)
                    .into(),
                Some((path, IconFormat::Png)) => image(image::Handle::from_path(path))
                    .width(ICON_SIZE)
                    .height(ICON_SIZE)
                    .into(),
                None => text(name.clone()).size(LABEL_SIZE).into(),
            },
            Glyph::Markup(markup) => {
                let label = render_markup(markup);
                let font = if label.bold {
                    Font {
                        weight: Weight::Bold,
                        ..Font::DEFAULT
                    }
                } else {
                    Font::DEFAULT
                };
                let size = if label.large {
                    LARGE_LABEL_SIZE
                } else {
                    LABEL_SIZE
                };
                text(label.text).font(font).size(size).into()
            }
        }
    }

    fn menu_strip(&self, id: ControlId) -> Option<Element<'_, Message>> {
        let labels = self.toolbars.menu_labels(id);
        if labels.is_empty() {
            return None;
        }
        let entries = labels.into_iter().enumerate().fold(
            Row::new().spacing(4).align_y(Vertical::Center),
            |strip, (index, label)| {
                strip.push(
                    button(text(label.to_string()).size(LABEL_SIZE))
                        .style(button::secondary)
                        .on_press(Message::MenuEntry(id, index)),
                )
            },
        );
        let close = button(text("×").size(LABEL_SIZE))
            .style(button::text)
            .on_press(Message::CloseMenu);
        Some(
            container(row![entries, close].spacing(8).align_y(Vertical::Center))
                .padding(4)
                .style(container::rounded_box)
                .into(),
        )
    }

    fn digit_preview(&self) -> Row<'_, Message> {
        self.session
            .digit_colors
            .iter()
            .enumerate()
            .fold(Row::new().spacing(6), |strip, (digit, color)| {
                strip.push(
                    text(digit.to_string())
                        .size(LARGE_LABEL_SIZE)
                        .color(to_color(*color)),
                )
            })
    }

    fn status_line(&self) -> Element<'_, Message> {
        let placement = match self.toolbars.misc().placement() {
            Some(surface) => format!("{surface:?}"),
            None => "-".to_string(),
        };
        let mut status = format!(
            "{} · width {:.0} · options on {}",
            self.session.engine, self.display_width, placement
        );
        if let Some(err) = &self.status {
            status.push_str(" · ");
            status.push_str(err);
        }
        text(status).size(LABEL_SIZE).into()
    }
}

fn to_color(color: DigitColor) -> Color {
    Color::from_rgb8(color.r, color.g, color.b)
}
