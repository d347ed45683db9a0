use crate::ParsedArtifact;

/// human readable set bonus summary, e.g. "4× Emblem of Severed Fate + 2× Noblesse Oblige".
/// sets below 2 pieces are omitted, 4 or more upgrades the label from 2 to 4.
/// sorted by piece count descending, first-seen order on ties.
pub fn detect_sets(artifacts:&[ParsedArtifact])->String{
	let mut counts:Vec<(&str,usize)>=vec![];
	for artifact in artifacts{
		if artifact.set_name.is_empty(){
			continue;
		}
		match counts.iter_mut().find(|(name,_)|*name==artifact.set_name.as_str()){
			Some(entry)=>entry.1+=1,
			None=>counts.push((artifact.set_name.as_str(),1)),
		}
	}
	counts.retain(|(_,count)|*count>=2);
	counts.sort_by(|a,b|b.1.cmp(&a.1));
	counts.iter()
		.map(|(name,count)|format!("{}× {}",if *count>=4{4}else{2},name))
		.collect::<Vec<_>>()
		.join(" + ")
}

//average value of one upgrade roll per substat kind (5-star artifacts)
const ROLL_AVG:[(&'static str,f64);10]=[
	("HP",253.94),
	("HP%",4.955),
	("ATK",16.54),
	("ATK%",4.955),
	("DEF",19.68),
	("DEF%",6.195),
	("อัตราคริ",3.305),
	("ดาเมจคริ",6.605),
	("ฟื้นฟูพลังงาน",5.505),
	("ความชำนาญธาตุ",19.82),
];

/// heuristic count of upgrade rolls behind a formatted substat value,
/// clamped to 1..=6. unknown names and unparseable values estimate 1.
pub fn estimate_rolls(name:&str,value:&str)->u8{
	let avg=match ROLL_AVG.iter().find(|(n,_)|*n==name){
		Some((_,avg))=>*avg,
		None=>return 1,
	};
	let cleaned=value.replace(['%','+',','],"");
	let value:f64=match cleaned.trim().parse(){
		Ok(v)=>v,
		Err(_)=>return 1,
	};
	(value/avg).round().clamp(1.0,6.0) as u8
}
