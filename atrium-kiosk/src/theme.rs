use iced::{
    theme,
    widget::{button, container},
    Background, Border, Color, Shadow, Theme,
};

/// Light content surfaces under a dark loading scrim, with the brand's
/// blue-to-violet accent pair.
#[derive(Debug, Clone, Copy)]
pub struct ShowcaseTheme;

impl ShowcaseTheme {
    // Core colors
    pub const INK: Color = Color::from_rgb(0.03, 0.03, 0.04); // #080809
    pub const SURFACE: Color = Color::from_rgb(0.976, 0.98, 0.984); // #F9FAFB
    pub const BRAND_BLUE: Color = Color::from_rgb(0.165, 0.447, 0.973); // #2A72F8
    pub const BRAND_VIOLET: Color = Color::from_rgb(0.561, 0.267, 0.925); // #8F44EC

    // Text colors
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.067, 0.094, 0.153); // #111827
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.42, 0.447, 0.502); // #6B7280
    pub const TEXT_INVERSE: Color = Color::from_rgb(1.0, 1.0, 1.0); // #FFFFFF
    pub const TEXT_INVERSE_DIM: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.7);

    // Overlay and frame colors
    pub const SCRIM: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.92);
    pub const CAPTION_SCRIM: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.45);
    pub const FRAME_BG: Color = Color::from_rgb(0.9, 0.91, 0.93); // #E5E8ED
    pub const BORDER_COLOR: Color = Color::from_rgb(0.82, 0.84, 0.87); // #D1D6DE

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::LIGHT;
        palette.background = Self::SURFACE;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::BRAND_BLUE;

        Theme::custom("Atrium".to_string(), palette)
    }
}

// Container styles using closures
pub enum Container {
    Page,
    NavBar,
    Footer,
    HeroFrame,
    CaptionChip,
    PlaceholderCard,
    OverlayScrim,
    SectionCard,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::Page => |_| container::Style {
                text_color: Some(ShowcaseTheme::TEXT_PRIMARY),
                background: Some(Background::Color(ShowcaseTheme::SURFACE)),
                border: Border::default(),
                shadow: Shadow::default(),
            },
            Container::NavBar => |_| container::Style {
                text_color: Some(ShowcaseTheme::TEXT_PRIMARY),
                background: Some(Background::Color(Color::WHITE)),
                border: Border {
                    color: ShowcaseTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::Footer => |_| container::Style {
                text_color: Some(ShowcaseTheme::TEXT_INVERSE_DIM),
                background: Some(Background::Color(ShowcaseTheme::INK)),
                border: Border::default(),
                shadow: Shadow::default(),
            },
            Container::HeroFrame => |_| container::Style {
                text_color: None,
                background: Some(Background::Color(ShowcaseTheme::FRAME_BG)),
                border: Border {
                    color: ShowcaseTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 16.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::CaptionChip => |_| container::Style {
                text_color: Some(ShowcaseTheme::TEXT_INVERSE),
                background: Some(Background::Color(ShowcaseTheme::CAPTION_SCRIM)),
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::PlaceholderCard => |_| container::Style {
                text_color: Some(ShowcaseTheme::TEXT_SECONDARY),
                background: Some(Background::Color(ShowcaseTheme::FRAME_BG)),
                border: Border {
                    color: ShowcaseTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 12.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::OverlayScrim => |_| container::Style {
                text_color: Some(ShowcaseTheme::TEXT_INVERSE),
                background: Some(Background::Color(ShowcaseTheme::SCRIM)),
                border: Border::default(),
                shadow: Shadow::default(),
            },
            Container::SectionCard => |_| container::Style {
                text_color: Some(ShowcaseTheme::TEXT_PRIMARY),
                background: Some(Background::Color(Color::WHITE)),
                border: Border {
                    color: ShowcaseTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 12.0.into(),
                },
                shadow: Shadow::default(),
            },
        }
    }
}

// Button styles
pub enum Button {
    Primary,
    Ghost,
    Chevron,
}

impl Button {
    pub fn style(&self) -> fn(&Theme, button::Status) -> button::Style {
        match self {
            Button::Primary => |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        ShowcaseTheme::BRAND_VIOLET
                    }
                    _ => ShowcaseTheme::BRAND_BLUE,
                };
                button::Style {
                    background: Some(Background::Color(background)),
                    text_color: ShowcaseTheme::TEXT_INVERSE,
                    border: Border {
                        color: Color::TRANSPARENT,
                        width: 0.0,
                        radius: 10.0.into(),
                    },
                    shadow: Shadow::default(),
                }
            },
            Button::Ghost => |_, status| {
                let text_color = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        ShowcaseTheme::BRAND_VIOLET
                    }
                    _ => ShowcaseTheme::BRAND_BLUE,
                };
                button::Style {
                    background: None,
                    text_color,
                    border: Border {
                        color: ShowcaseTheme::BRAND_BLUE,
                        width: 2.0,
                        radius: 10.0.into(),
                    },
                    shadow: Shadow::default(),
                }
            },
            Button::Chevron => |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        Color::from_rgba(0.0, 0.0, 0.0, 0.3)
                    }
                    _ => Color::from_rgba(0.0, 0.0, 0.0, 0.2),
                };
                button::Style {
                    background: Some(Background::Color(background)),
                    text_color: ShowcaseTheme::TEXT_INVERSE,
                    border: Border {
                        color: Color::TRANSPARENT,
                        width: 0.0,
                        radius: 18.0.into(),
                    },
                    shadow: Shadow::default(),
                }
            },
        }
    }
}

/// Dot indicator style; the active dot is widened and solid by the caller,
/// color is handled here.
pub fn dot_style(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_, status| {
        let color = if active {
            ShowcaseTheme::TEXT_INVERSE
        } else {
            match status {
                button::Status::Hovered => Color::from_rgba(1.0, 1.0, 1.0, 0.7),
                _ => Color::from_rgba(1.0, 1.0, 1.0, 0.5),
            }
        };
        button::Style {
            background: Some(Background::Color(color)),
            text_color: Color::TRANSPARENT,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 2.0.into(),
            },
            shadow: Shadow::default(),
        }
    }
}
