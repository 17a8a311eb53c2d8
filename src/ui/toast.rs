// SPDX-License-Identifier: MPL-2.0
//! Toast view for banners attached to an [`IcedSurface`].
//!
//! Each banner is drawn at the position its frame currently has, so the
//! layout computed by the snackbar core is reproduced exactly. Frames are
//! layered in paint order inside a `Stack`.

use super::iced_surface::{Frame, IcedSurface};
use super::swipe;
use crate::snack::BannerKey;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, spacing, typography};
use iced::widget::{button, container, mouse_area, text, Container, Row, Stack, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Theme};

/// Interactions with a rendered banner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Action(BannerKey),
    Close(BannerKey),
    Pointer(swipe::Message),
}

/// Which side of the host content a layer is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Banners with negative z-order, painted beneath the host content.
    Under,
    Over,
}

impl Layer {
    fn contains(self, z_order: i32) -> bool {
        match self {
            Layer::Under => z_order < 0,
            Layer::Over => z_order >= 0,
        }
    }
}

/// Renders one banner at its current animated position.
pub fn view(frame: &Frame, surface: &IcedSurface) -> Element<'static, Message> {
    let now = surface.now();
    let position = frame.position(now);
    let alpha = frame.alpha(now);
    let key = frame.key;

    let mut content = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);

    if let Some(icon) = &frame.content.icon {
        content = content.push(Text::new(icon.clone()).size(typography::TITLE_SM));
    }

    content = content.push(
        Container::new(
            Text::new(frame.content.title.clone())
                .size(typography::BODY)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(Color {
                        a: alpha,
                        ..palette::WHITE
                    }),
                }),
        )
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Left),
    );

    if let Some(label) = &frame.content.action_label {
        content = content.push(
            button(Text::new(label.clone()).size(typography::BODY))
                .on_press(Message::Action(key))
                .padding(spacing::XXS)
                .style(move |theme, status| action_button_style(theme, status, alpha)),
        );
    }

    content = content.push(
        button(Text::new("×").size(typography::BODY))
            .on_press(Message::Close(key))
            .padding(spacing::XXS)
            .style(move |theme, status| close_button_style(theme, status, alpha)),
    );

    let card = Container::new(content)
        .width(Length::Fixed(position.width))
        .height(Length::Fixed(position.height))
        .padding([0.0, spacing::SM])
        .align_y(alignment::Vertical::Center)
        .style(move |_theme: &Theme| banner_container_style(alpha));

    let interactive = mouse_area(card)
        .on_move(move |point| Message::Pointer(swipe::Message::Moved(key, point)))
        .on_press(Message::Pointer(swipe::Message::Pressed(key)))
        .on_release(Message::Pointer(swipe::Message::Released(key)))
        .on_exit(Message::Pointer(swipe::Message::Exited(key)));

    Container::new(interactive)
        .padding(Padding {
            top: position.y.max(0.0),
            right: 0.0,
            bottom: 0.0,
            left: position.x.max(0.0),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Renders every banner of one layer, bottom-most first.
pub fn view_layer(surface: &IcedSurface, layer: Layer) -> Element<'static, Message> {
    let banners: Vec<Element<'static, Message>> = surface
        .frames()
        .filter(|frame| layer.contains(frame.target().z_order))
        .map(|frame| view(frame, surface))
        .collect();

    Stack::with_children(banners)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn banner_container_style(alpha: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE * alpha,
            ..palette::GRAY_900
        })),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::MD.into(),
        },
        shadow: if alpha > opacity::OVERLAY_SUBTLE {
            shadow::MD
        } else {
            shadow::NONE
        },
        text_color: Some(Color {
            a: alpha,
            ..palette::WHITE
        }),
        ..Default::default()
    }
}

fn action_button_style(_theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
        button::Status::Active | button::Status::Disabled => palette::PRIMARY_500,
    };
    button::Style {
        background: None,
        text_color: Color {
            a: alpha,
            ..text_color
        },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

fn close_button_style(_theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE * alpha,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM * alpha,
            ..palette::GRAY_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };
    button::Style {
        background,
        text_color: Color {
            a: alpha,
            ..palette::WHITE
        },
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_split_on_z_sign() {
        assert!(Layer::Under.contains(-1));
        assert!(!Layer::Under.contains(0));
        assert!(Layer::Over.contains(0));
        assert!(Layer::Over.contains(7));
    }

    #[test]
    fn container_fades_with_alpha() {
        let visible = banner_container_style(1.0);
        let faded = banner_container_style(0.0);

        assert_eq!(visible.shadow, shadow::MD);
        assert_eq!(faded.shadow, shadow::NONE);
        assert_eq!(faded.text_color.map(|c| c.a), Some(0.0));
    }

    #[test]
    fn action_button_highlights_on_hover() {
        let active = action_button_style(&Theme::Dark, button::Status::Active, 1.0);
        let hovered = action_button_style(&Theme::Dark, button::Status::Hovered, 1.0);
        assert_ne!(active.text_color, hovered.text_color);
    }
}
