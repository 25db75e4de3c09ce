// SPDX-License-Identifier: MPL-2.0
//! Card stack renderer and gesture capture.
//!
//! A `canvas::Program` that draws every visible card from its
//! [`CardTransform`] and turns raw mouse events over the top card into
//! gesture messages. The canvas knows nothing about gesture resolution; it
//! only reports start/move/end and draws whatever the controller exposes.

use crate::deck::CardTransform;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::stack::component::Message;
use crate::ui::theming::ColorScheme;
use iced::widget::canvas::{self, Frame, Path};
use iced::widget::image;
use iced::{mouse, Point, Rectangle, Renderer, Size, Theme, Vector};

/// Everything needed to draw one card.
#[derive(Debug, Clone)]
pub struct CardFace {
    pub transform: CardTransform,
    pub title: String,
    pub image: Option<image::Handle>,
}

/// Canvas program for the deck. Faces are ordered top card first.
pub struct DeckCanvas {
    faces: Vec<CardFace>,
    scheme: ColorScheme,
    body_text: String,
    action_text: String,
}

impl DeckCanvas {
    #[must_use]
    pub fn new(
        faces: Vec<CardFace>,
        scheme: ColorScheme,
        body_text: String,
        action_text: String,
    ) -> Self {
        Self {
            faces,
            scheme,
            body_text,
            action_text,
        }
    }

    /// Base card rectangle, centered in the canvas, before any transform.
    fn base_rect(bounds_size: Size) -> Rectangle {
        let width = (bounds_size.width * sizing::CARD_WIDTH_FRACTION)
            .clamp(sizing::CARD_MIN_WIDTH, sizing::CARD_MAX_WIDTH)
            .min(bounds_size.width);
        let height = (width * sizing::CARD_ASPECT).min(bounds_size.height);

        Rectangle {
            x: (bounds_size.width - width) / 2.0,
            y: (bounds_size.height - height) / 2.0,
            width,
            height,
        }
    }

    /// Hit rectangle of the interactive top card.
    ///
    /// Gestures only start from rest, so the top card's rotation is zero
    /// whenever this matters and an axis-aligned test is exact.
    fn top_card_rect(&self, bounds_size: Size) -> Option<Rectangle> {
        let top = self.faces.first()?;
        let base = Self::base_rect(bounds_size);
        Some(Rectangle {
            x: base.x + top.transform.offset_x,
            y: base.y + top.transform.offset_y,
            ..base
        })
    }

    fn draw_card(&self, frame: &mut Frame, base: Rectangle, face: &CardFace) {
        let size = Size::new(base.width, base.height);
        let center = Point::new(
            base.x + base.width / 2.0 + face.transform.offset_x,
            base.y + base.height / 2.0 + face.transform.offset_y,
        );

        frame.with_save(|frame| {
            frame.translate(Vector::new(center.x, center.y));
            frame.rotate(face.transform.rotation_deg.to_radians());

            // Local coordinates: origin at the card center
            let top_left = Point::new(-size.width / 2.0, -size.height / 2.0);

            let border = Path::rounded_rectangle(
                Point::new(top_left.x - 1.0, top_left.y - 1.0),
                Size::new(size.width + 2.0, size.height + 2.0),
                radius::LG.into(),
            );
            frame.fill(&border, self.scheme.card_border);

            let body = Path::rounded_rectangle(top_left, size, radius::LG.into());
            frame.fill(&body, self.scheme.card_background);

            // Photo area spans the upper part of the card
            let pad = spacing::SM;
            let photo_area = Rectangle {
                x: top_left.x + pad,
                y: top_left.y + pad,
                width: size.width - 2.0 * pad,
                height: size.height * 0.55,
            };

            match &face.image {
                Some(handle) => {
                    frame.draw_image(photo_area, canvas::Image::new(handle.clone()));
                }
                None => {
                    frame.fill_rectangle(
                        photo_area.position(),
                        photo_area.size(),
                        self.scheme.card_placeholder,
                    );
                }
            }

            let mut line_y = photo_area.y + photo_area.height + spacing::XS;
            frame.fill_text(canvas::Text {
                content: face.title.clone(),
                position: Point::new(top_left.x + pad, line_y),
                color: self.scheme.text_primary,
                size: typography::TITLE.into(),
                ..canvas::Text::default()
            });

            line_y += typography::TITLE + spacing::XS;
            frame.fill_text(canvas::Text {
                content: self.body_text.clone(),
                position: Point::new(top_left.x + pad, line_y),
                color: self.scheme.text_secondary,
                size: typography::BODY.into(),
                ..canvas::Text::default()
            });

            // Action strip along the bottom edge
            let strip_height = 32.0;
            let strip_top_left = Point::new(
                top_left.x + pad,
                top_left.y + size.height - pad - strip_height,
            );
            let strip = Path::rounded_rectangle(
                strip_top_left,
                Size::new(size.width - 2.0 * pad, strip_height),
                radius::SM.into(),
            );
            frame.fill(&strip, self.scheme.brand_primary);
            frame.fill_text(canvas::Text {
                content: self.action_text.clone(),
                position: Point::new(
                    strip_top_left.x + spacing::SM,
                    strip_top_left.y + (strip_height - typography::BODY) / 2.0,
                ),
                color: iced::Color::WHITE,
                size: typography::BODY.into(),
                ..canvas::Text::default()
            });
        });
    }
}

impl canvas::Program<Message> for DeckCanvas {
    /// Pointer position at gesture start, while a drag is in progress.
    type State = Option<Point>;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                let hit = self.top_card_rect(bounds.size())?;
                if hit.contains(position) {
                    *state = Some(position);
                    return Some(Action::publish(Message::GestureStarted).and_capture());
                }
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let origin = (*state)?;
                // Leaving the canvas ends the gesture, like releasing
                let Some(position) = cursor.position_in(bounds) else {
                    *state = None;
                    return Some(Action::publish(Message::GestureEnded).and_capture());
                };
                return Some(
                    Action::publish(Message::GestureMoved {
                        dx: position.x - origin.x,
                        dy: position.y - origin.y,
                    })
                    .and_capture(),
                );
            }
            iced::Event::Mouse(
                mouse::Event::ButtonReleased(mouse::Button::Left) | mouse::Event::CursorLeft,
            ) => {
                if state.take().is_some() {
                    return Some(Action::publish(Message::GestureEnded).and_capture());
                }
            }
            _ => {}
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let base = Self::base_rect(bounds.size());

        // Bottom of the stack first so the top card paints over it
        for face in self.faces.iter().rev() {
            self.draw_card(&mut frame, base, face);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.is_some() {
            return mouse::Interaction::Grabbing;
        }

        let hovering = cursor
            .position_in(bounds)
            .zip(self.top_card_rect(bounds.size()))
            .is_some_and(|(position, hit)| hit.contains(position));

        if hovering {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
