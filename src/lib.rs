mod api;
mod data;
mod store;
mod fight_prop;
mod equip;
mod character;
mod player;
mod summary;
mod error;
pub use api::*;
pub use data::*;
pub use store::*;
pub use fight_prop::*;
pub use equip::*;
pub use character::*;
pub use player::*;
pub use summary::*;
pub use error::*;
pub use reqwest;

pub const USER_AGENT:&'static str="paimonguide-showcase/v0.1.0";
pub(crate) const UI_BASE:&'static str="https://enka.network/ui";

pub(crate) fn ui_url(name:impl AsRef<str>)->String{
	format!("{}/{}.png",UI_BASE,name.as_ref())
}
