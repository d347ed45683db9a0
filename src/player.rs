use serde::Serialize;

use crate::{parse_character, CharacterParse, ParsedCharacter, RawPlayerResponse, StoreView};

#[derive(Clone,Debug,Serialize)]
#[serde(rename_all="camelCase")]
pub struct ParsedPlayer{
	pub uid:String,
	pub nickname:String,
	pub level:u8,
	pub signature:String,
	pub world_level:u8,
	pub achievements:u32,
	pub spiral_abyss:String,
	pub profile_picture_url:String,
	pub characters:Vec<ParsedCharacter>,
}

/// top level assembly: one normalized view per payload.
/// showcase order is preserved, unrecognized characters are dropped.
pub fn parse_player(raw:&RawPlayerResponse,store:&StoreView)->ParsedPlayer{
	let player=&raw.player_info;
	let profile_picture_url=player.profile_picture
		.and_then(|p|store.character(p.avatar_id))
		.map(|meta|crate::ui_url(meta.side_icon_name.replace("_Side","")))
		.unwrap_or_default();
	let spiral_abyss=match player.tower_floor_index.filter(|floor|*floor>0){
		Some(floor)=>format!("{}-{}",floor,player.tower_level_index.unwrap_or(0)),
		None=>String::from("-"),
	};
	let mut characters=Vec::with_capacity(raw.avatar_info_list.len());
	for avatar in &raw.avatar_info_list{
		match parse_character(avatar,store){
			CharacterParse::Recognized(c)=>characters.push(c),
			CharacterParse::Unrecognized(id)=>{
				tracing::debug!(avatar_id=id,"character not in store, skipped");
			}
		}
	}
	ParsedPlayer{
		uid:raw.uid.clone(),
		nickname:player.nickname.clone(),
		level:player.level,
		signature:player.signature.clone(),
		world_level:player.world_level,
		achievements:player.achievements,
		spiral_abyss,
		profile_picture_url,
		characters,
	}
}
