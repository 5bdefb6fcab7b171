//! Sample reference datasets for tests.

use std::io::Write;
use std::path::Path;
use std::time::{Duration, SystemTime};

use crate::dataset::DatasetConfig;

pub const AIRPORTS: &str = "\
id,ident,type,name,latitude_deg,longitude_deg,elevation_ft,continent,iso_country
3622,KJFK,large_airport,John F Kennedy International Airport,40.6398,-73.7789,13,NA,US
3697,KLGA,large_airport,La Guardia Airport,40.7772,-73.8726,21,NA,US
";

pub const RUNWAYS: &str = "\
id,airport_ref,airport_ident,length_ft,width_ft,surface,lighted,closed,le_ident,le_latitude_deg,le_longitude_deg,le_elevation_ft,le_heading_degT,le_displaced_threshold_ft,he_ident,he_latitude_deg,he_longitude_deg,he_elevation_ft,he_heading_degT,he_displaced_threshold_ft
1,3622,KJFK,12000,,ASP,1,0,04L,,,,,,22R,,,,,
2,0,XORPHAN,3000,75,GRS,0,0,09,,,,,,27,,,,,
3,3622,KJFK,14511,150,ASP,1,0,13R,40.6483,-73.8160,13,121,,31L,40.6281,-73.77,12,301,
";

pub const FREQUENCIES: &str = "\
id,airport_ref,airport_ident,type,description,frequency_mhz
1,3622,KJFK,ATIS,ATIS,128.725
2,0,XORPHAN,CTAF,CTAF,122.8
3,3622,KJFK,TWR,KENNEDY TWR,119.1
";

/// Write the sample datasets into `dir` and return a config pointing at them.
pub fn write_datasets(dir: &Path) -> DatasetConfig {
    let config = DatasetConfig::new(dir);
    std::fs::write(config.airports_path(), AIRPORTS).unwrap();
    std::fs::write(config.runways_path(), RUNWAYS).unwrap();
    std::fs::write(config.frequencies_path(), FREQUENCIES).unwrap();
    config
}

/// Append one row to the airport file and push its mtime forward.
pub fn append_airport(config: &DatasetConfig, row: &str) {
    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .open(config.airports_path())
        .unwrap();
    writeln!(file, "{row}").unwrap();
    file.set_modified(SystemTime::now() + Duration::from_secs(60))
        .unwrap();
}
