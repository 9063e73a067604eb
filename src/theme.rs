//! Design tokens: color scales, gradients and animations.
//!
//! The tokens are rendered once into a stylesheet (`Theme::stylesheet`) that
//! the app mounts in `<head>`. Utility class names follow the
//! `bg-<gradient>` / `animate-<name>` / `text-<color>-<shade>` scheme.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorScale {
    pub name: &'static str,
    pub shades: &'static [(u16, &'static str)],
}

impl ColorScale {
    pub fn shade(&self, shade: u16) -> Option<&'static str> {
        self.shades.iter().find(|(s, _)| *s == shade).map(|(_, hex)| *hex)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Gradient {
    pub name: &'static str,
    pub css: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Keyframes {
    pub name: &'static str,
    pub frames: &'static [(&'static str, &'static str)],
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Animation {
    pub name: &'static str,
    pub keyframes: &'static str,
    pub duration_ms: u32,
    pub timing: &'static str,
    pub infinite: bool,
}

impl Animation {
    pub fn shorthand(&self) -> String {
        let mut s = format!("{} {}ms {}", self.keyframes, self.duration_ms, self.timing);
        if self.infinite {
            s.push_str(" infinite");
        } else {
            s.push_str(" both");
        }
        s
    }
}

const BRAND: ColorScale = ColorScale {
    name: "brand",
    shades: &[
        (50, "#fff7ed"),
        (100, "#ffedd5"),
        (200, "#fed7aa"),
        (300, "#fdba74"),
        (400, "#fb923c"),
        (500, "#f97316"),
        (600, "#ea580c"),
        (700, "#c2410c"),
        (800, "#9a3412"),
        (900, "#7c2d12"),
    ],
};

const HOPE: ColorScale = ColorScale {
    name: "hope",
    shades: &[
        (50, "#f0fdfa"),
        (100, "#ccfbf1"),
        (200, "#99f6e4"),
        (300, "#5eead4"),
        (400, "#2dd4bf"),
        (500, "#14b8a6"),
        (600, "#0d9488"),
        (700, "#0f766e"),
        (800, "#115e59"),
        (900, "#134e4a"),
    ],
};

const HEART: ColorScale = ColorScale {
    name: "heart",
    shades: &[(400, "#fb7185"), (500, "#f43f5e"), (600, "#e11d48")],
};

const INK: ColorScale = ColorScale {
    name: "ink",
    shades: &[
        (50, "#f8fafc"),
        (100, "#f1f5f9"),
        (300, "#cbd5e1"),
        (500, "#64748b"),
        (700, "#334155"),
        (900, "#0f172a"),
    ],
};

const GRADIENTS: &[Gradient] = &[
    Gradient {
        name: "hero",
        css: "linear-gradient(135deg, #f97316 0%, #f43f5e 55%, #0d9488 100%)",
    },
    Gradient {
        name: "cta",
        css: "linear-gradient(90deg, #ea580c 0%, #e11d48 100%)",
    },
    Gradient {
        name: "card",
        css: "linear-gradient(180deg, #ffffff 0%, #f0fdfa 100%)",
    },
];

const KEYFRAMES: &[Keyframes] = &[
    Keyframes {
        name: "fade-in",
        frames: &[("0%", "opacity: 0"), ("100%", "opacity: 1")],
    },
    Keyframes {
        name: "slide-up",
        frames: &[
            ("0%", "opacity: 0; transform: translateY(16px)"),
            ("100%", "opacity: 1; transform: translateY(0)"),
        ],
    },
    Keyframes {
        name: "pulse-soft",
        frames: &[
            ("0%, 100%", "transform: scale(1)"),
            ("50%", "transform: scale(1.04)"),
        ],
    },
    Keyframes {
        name: "heart-beat",
        frames: &[
            ("0%, 100%", "transform: scale(1)"),
            ("15%", "transform: scale(1.18)"),
            ("30%", "transform: scale(1)"),
            ("45%", "transform: scale(1.12)"),
        ],
    },
];

const ANIMATIONS: &[Animation] = &[
    Animation {
        name: "fade-in",
        keyframes: "fade-in",
        duration_ms: 500,
        timing: "ease-out",
        infinite: false,
    },
    Animation {
        name: "slide-up",
        keyframes: "slide-up",
        duration_ms: 600,
        timing: "cubic-bezier(0.16, 1, 0.3, 1)",
        infinite: false,
    },
    Animation {
        name: "pulse-soft",
        keyframes: "pulse-soft",
        duration_ms: 2400,
        timing: "ease-in-out",
        infinite: true,
    },
    Animation {
        name: "heart-beat",
        keyframes: "heart-beat",
        duration_ms: 1400,
        timing: "ease-in-out",
        infinite: true,
    },
];

// Rules that are not derived from tokens.
const BASE_RULES: &str = "\
:root { --sat: env(safe-area-inset-top); --sar: env(safe-area-inset-right); \
--sab: env(safe-area-inset-bottom); --sal: env(safe-area-inset-left); --vh: 1vh; }
.lazy-image { display: block; width: 100%; transition: opacity 400ms ease-out, filter 400ms ease-out; }
.lazy-image.is-pending { opacity: 0.6; filter: blur(6px); }
.lazy-image.is-loaded { opacity: 1; filter: none; }
.lazy-image.is-error { opacity: 1; filter: grayscale(1); }
.site-header { position: sticky; top: 0; padding-top: var(--sat); transition: transform 250ms ease; }
.site-header.is-hidden { transform: translateY(-100%); }
.full-height { min-height: calc(var(--vh) * 100); }
";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Theme {
    pub colors: Vec<ColorScale>,
    pub gradients: Vec<Gradient>,
    pub keyframes: Vec<Keyframes>,
    pub animations: Vec<Animation>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: vec![BRAND, HOPE, HEART, INK],
            gradients: GRADIENTS.to_vec(),
            keyframes: KEYFRAMES.to_vec(),
            animations: ANIMATIONS.to_vec(),
        }
    }
}

impl Theme {
    pub fn color(&self, name: &str, shade: u16) -> Option<&'static str> {
        self.colors.iter().find(|c| c.name == name)?.shade(shade)
    }

    pub fn stylesheet(&self) -> String {
        let mut css = String::from(":root {");
        for scale in &self.colors {
            for (shade, hex) in scale.shades {
                css.push_str(&format!(" --color-{}-{}: {};", scale.name, shade, hex));
            }
        }
        css.push_str(" }\n");
        for scale in &self.colors {
            for (shade, _) in scale.shades {
                let var = format!("var(--color-{}-{})", scale.name, shade);
                css.push_str(&format!(".text-{n}-{s} {{ color: {v}; }}\n", n = scale.name, s = shade, v = var));
                css.push_str(&format!(".bg-{n}-{s} {{ background-color: {v}; }}\n", n = scale.name, s = shade, v = var));
            }
        }
        for g in &self.gradients {
            css.push_str(&format!(".bg-{} {{ background-image: {}; }}\n", g.name, g.css));
        }
        for k in &self.keyframes {
            css.push_str(&format!("@keyframes {} {{", k.name));
            for (at, body) in k.frames {
                css.push_str(&format!(" {} {{ {}; }}", at, body));
            }
            css.push_str(" }\n");
        }
        for a in &self.animations {
            css.push_str(&format!(".animate-{} {{ animation: {}; }}\n", a.name, a.shorthand()));
        }
        css.push_str("@media (prefers-reduced-motion: reduce) { [class*=\"animate-\"] { animation: none; } }\n");
        css.push_str(BASE_RULES);
        css
    }

    /// Tokens as JSON, for tooling outside the app.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_lookup() {
        let t = Theme::default();
        assert_eq!(t.color("brand", 500), Some("#f97316"));
        assert_eq!(t.color("hope", 600), Some("#0d9488"));
        assert_eq!(t.color("brand", 550), None);
        assert_eq!(t.color("missing", 500), None);
    }

    #[test]
    fn every_animation_has_keyframes() {
        let t = Theme::default();
        for a in &t.animations {
            assert!(t.keyframes.iter().any(|k| k.name == a.keyframes), "{}", a.name);
        }
    }

    #[test]
    fn stylesheet_contains_tokens() {
        let css = Theme::default().stylesheet();
        assert!(css.contains("--color-brand-500: #f97316;"));
        assert!(css.contains(".text-ink-900 { color: var(--color-ink-900); }"));
        assert!(css.contains(".bg-hero { background-image: linear-gradient(135deg"));
        assert!(css.contains("@keyframes heart-beat {"));
        assert!(css.contains(".animate-pulse-soft { animation: pulse-soft 2400ms ease-in-out infinite; }"));
        assert!(css.contains("--sat: env(safe-area-inset-top)"));
        assert!(css.contains(".lazy-image.is-loaded"));
    }

    #[test]
    fn one_shot_animations_keep_final_frame() {
        let fade = &Theme::default().animations[0];
        assert_eq!(fade.shorthand(), "fade-in 500ms ease-out both");
    }

    #[test]
    fn tokens_export_as_json() {
        let raw = Theme::default().to_json().unwrap();
        let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(v["colors"][0]["name"], "brand");
        assert_eq!(v["gradients"].as_array().map(Vec::len), Some(3));
    }
}
