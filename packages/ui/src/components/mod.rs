//! Building blocks shared by the screens: buttons, form inputs, cards and
//! status badges. Styling is Tailwind utility classes against the CTN theme
//! (`primary`, `accent`, `neutral`, `error`).

mod button;
pub use button::{Button, ButtonSize, ButtonVariant};

mod input;
pub use input::{FormError, Input, Label, Select, Textarea};

mod card;
pub use card::{Card, StatCard};

mod status_badge;
pub use status_badge::{badge_tone, StatusBadge};
