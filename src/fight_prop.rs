use std::borrow::Cow;

use serde::Serialize;

use crate::RawAvatarInfo;

pub(crate) const BASE_ATTACK_PROP:&'static str="FIGHT_PROP_BASE_ATTACK";

/// Thai display label for a fight-prop code.
/// unknown codes come back with the FIGHT_PROP_ prefix stripped, never an error.
pub fn stat_display_name(prop_id:&str)->Cow<'static,str>{
	let name=match prop_id{
		"FIGHT_PROP_HP"=>"HP",
		"FIGHT_PROP_HP_PERCENT"=>"HP%",
		"FIGHT_PROP_ATTACK"=>"ATK",
		"FIGHT_PROP_ATTACK_PERCENT"=>"ATK%",
		"FIGHT_PROP_DEFENSE"=>"DEF",
		"FIGHT_PROP_DEFENSE_PERCENT"=>"DEF%",
		"FIGHT_PROP_CRITICAL"=>"อัตราคริ",
		"FIGHT_PROP_CRITICAL_HURT"=>"ดาเมจคริ",
		"FIGHT_PROP_CHARGE_EFFICIENCY"=>"ฟื้นฟูพลังงาน",
		"FIGHT_PROP_HEAL_ADD"=>"โบนัสการรักษา",
		"FIGHT_PROP_ELEMENT_MASTERY"=>"ความชำนาญธาตุ",
		"FIGHT_PROP_PHYSICAL_ADD_HURT"=>"โบนัสกายภาพ",
		"FIGHT_PROP_FIRE_ADD_HURT"=>"โบนัส Pyro",
		"FIGHT_PROP_ELEC_ADD_HURT"=>"โบนัส Electro",
		"FIGHT_PROP_WATER_ADD_HURT"=>"โบนัส Hydro",
		"FIGHT_PROP_WIND_ADD_HURT"=>"โบนัส Anemo",
		"FIGHT_PROP_ICE_ADD_HURT"=>"โบนัส Cryo",
		"FIGHT_PROP_ROCK_ADD_HURT"=>"โบนัส Geo",
		"FIGHT_PROP_GRASS_ADD_HURT"=>"โบนัส Dendro",
		"FIGHT_PROP_BASE_ATTACK"=>"Base ATK",
		_=>return Cow::Owned(prop_id.strip_prefix("FIGHT_PROP_").unwrap_or(prop_id).to_owned()),
	};
	Cow::Borrowed(name)
}

/// closed membership test, must match the game's own percent semantics exactly
pub fn is_percent_prop(prop_id:&str)->bool{
	matches!(prop_id,
		"FIGHT_PROP_HP_PERCENT"|
		"FIGHT_PROP_ATTACK_PERCENT"|
		"FIGHT_PROP_DEFENSE_PERCENT"|
		"FIGHT_PROP_CRITICAL"|
		"FIGHT_PROP_CRITICAL_HURT"|
		"FIGHT_PROP_CHARGE_EFFICIENCY"|
		"FIGHT_PROP_HEAL_ADD"|
		"FIGHT_PROP_PHYSICAL_ADD_HURT"|
		"FIGHT_PROP_FIRE_ADD_HURT"|
		"FIGHT_PROP_ELEC_ADD_HURT"|
		"FIGHT_PROP_WATER_ADD_HURT"|
		"FIGHT_PROP_WIND_ADD_HURT"|
		"FIGHT_PROP_ICE_ADD_HURT"|
		"FIGHT_PROP_ROCK_ADD_HURT"|
		"FIGHT_PROP_GRASS_ADD_HURT")
}

/// percent props arrive as fractions (0.283 -> "28.3%"),
/// elemental mastery is a plain integer,
/// everything else is an integer with thousands separators
pub fn format_stat_value(prop_id:&str,value:f64)->String{
	if is_percent_prop(prop_id){
		return format!("{:.1}%",value*100.0);
	}
	let rounded=value.round() as i64;
	if prop_id=="FIGHT_PROP_ELEMENT_MASTERY"{
		return rounded.to_string();
	}
	group_thousands(rounded)
}

pub(crate) fn group_thousands(value:i64)->String{
	let digits=value.unsigned_abs().to_string();
	let mut out=String::with_capacity(digits.len()+4);
	if value<0{
		out.push('-');
	}
	for (i,c) in digits.chars().enumerate(){
		if i>0&&(digits.len()-i)%3==0{
			out.push(',');
		}
		out.push(c);
	}
	out
}

#[derive(Clone,Debug,Serialize)]
#[serde(rename_all="camelCase")]
pub struct ParsedStats{
	pub max_hp:i64,
	pub atk:i64,
	pub def:i64,
	pub crit_rate:f64,
	pub crit_dmg:f64,
	pub energy_recharge:f64,
	pub elemental_mastery:i64,
	pub healing_bonus:f64,
	pub element_dmg_bonus:f64,
	pub element_dmg_type:String,
	pub physical_dmg_bonus:f64,
}

//fixed ascending key order, ties keep the first-encountered key
const ELEMENT_DMG_PROPS:[(&'static str,&'static str);8]=[
	("30","Physical"),
	("40","Pyro"),
	("41","Electro"),
	("42","Hydro"),
	("43","Dendro"),
	("44","Anemo"),
	("45","Geo"),
	("46","Cryo"),
];

fn percent(value:f64)->f64{
	(value*1000.0).round()/10.0
}

/// derived stats off the numeric-key fight-prop map.
/// only the single highest nonzero elemental bonus is surfaced.
pub(crate) fn parse_stats(avatar:&RawAvatarInfo)->ParsedStats{
	let mut element_dmg_bonus=0.0;
	let mut element_dmg_type="";
	for (key,element) in ELEMENT_DMG_PROPS{
		let value=avatar.fight_prop(key);
		if value>element_dmg_bonus{
			element_dmg_bonus=value;
			element_dmg_type=element;
		}
	}
	ParsedStats{
		max_hp:avatar.fight_prop("2000").round() as i64,
		atk:avatar.fight_prop("2001").round() as i64,
		def:avatar.fight_prop("2002").round() as i64,
		crit_rate:percent(avatar.fight_prop("20")),
		crit_dmg:percent(avatar.fight_prop("22")),
		energy_recharge:percent(avatar.fight_prop("23")),
		elemental_mastery:avatar.fight_prop("28").round() as i64,
		healing_bonus:percent(avatar.fight_prop("26")),
		element_dmg_bonus:percent(element_dmg_bonus),
		element_dmg_type:element_dmg_type.to_owned(),
		physical_dmg_bonus:percent(avatar.fight_prop("30")),
	}
}
