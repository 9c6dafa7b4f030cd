mod button;
mod card;
mod copy_button;
mod docs_link;
mod icons;
mod logo;
mod section;

pub use button::Button;
pub use card::{Card, CardCallToAction};
pub use copy_button::{CopyButton, CopyControlView};
pub use docs_link::DocsLink;
pub use icons::{Icon, IconSvg};
pub use logo::ViteLogo;
pub use section::Section;
