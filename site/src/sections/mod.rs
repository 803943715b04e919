// Marketing sections

mod footer;
mod hero;
mod nav;
mod podcast;
mod testimonials;

pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use podcast::{PodcastEpisodes, PodcastHero};
pub use testimonials::Testimonials;
