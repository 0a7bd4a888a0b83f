#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub const DATASET: &str = "\
kdrama_id,drama_name,year,director,screenwriter,country,type,tot_eps,duration,start_dt,end_dt,aired_on,org_net,content_rt,synopsis,rank,pop
KD1,Star Struck,2023,Kim,Lee,South Korea,Drama,16,3900,,,,,15+ - Teens,A top star secretly falls for a devoted fan who runs her fan club.,120,900
KD2,Queenmaker,2023,Oh,Moon,South Korea,Drama,11,3600,,,,,18+ Restricted (violence & profanity),A ruthless fixer backs a human rights lawyer running for mayor of Seoul.,45,300
KD3,Idol Days,2021,Park,Choi,South Korea,Drama,12,,,,,,15+ - Teens,A struggling idol group and their fans chase one last hit song.,300,1200
KD4,Fan Letter,2019,Jung,Han,South Korea,Drama,16,3000,,,,,G - All Ages,A loyal fan writes letters to a fading star who finally answers.,500,1500
KD5,Court Battle,2022,Yoon,Seo,South Korea,Drama,16,4200,,,,,15+ - Teens,Rival lawyers face off in a courtroom over a political scandal.,80,700
KD6,Lost Script,2020,Kang,Bae,South Korea,Drama,8,3300,,,,,15+ - Teens,,900,2000
";

pub fn write_dataset(dir: &Path) -> PathBuf {
    let path = dir.join("korean_drama.csv");
    std::fs::write(&path, DATASET).unwrap();
    path
}
