use clap::{Parser, Subcommand};
use panchanga_base::{
    ZodiacMode, angular_difference, karana_from_elongation, nakshatra_from_longitude,
    rashi_from_longitude, tithi_from_elongation, vikram_samvat_from_civil_year, yoga_from_sum,
};
use panchanga_engine::{
    Body, Ephemeris, EphemerisError, GeoLocation, HouseSystem, MonthConvention, PanchangOptions,
    compute_panchang,
};
use panchanga_time::CivilDateTime;

#[derive(Parser)]
#[command(name = "panchanga", about = "Panchanga derivation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tithi from Sun and Moon longitudes
    Tithi {
        /// Sun ecliptic longitude in degrees
        sun: f64,
        /// Moon ecliptic longitude in degrees
        moon: f64,
    },
    /// Nakshatra from the Moon's longitude
    Nakshatra {
        /// Ecliptic longitude in degrees
        lon: f64,
    },
    /// Yoga from Sun and Moon longitudes
    Yoga {
        /// Sun ecliptic longitude in degrees
        sun: f64,
        /// Moon ecliptic longitude in degrees
        moon: f64,
    },
    /// Karana from Sun and Moon longitudes
    Karana {
        /// Sun ecliptic longitude in degrees
        sun: f64,
        /// Moon ecliptic longitude in degrees
        moon: f64,
    },
    /// Rashi from an ecliptic longitude
    Rashi {
        /// Ecliptic longitude in degrees
        lon: f64,
    },
    /// Convert a civil date/time to Julian Day (UT)
    Jd {
        /// Local datetime (YYYY-MM-DDThh:mm)
        date: String,
        /// Timezone offset from UTC in hours (east positive)
        #[arg(long, default_value = "0")]
        tz: f64,
    },
    /// Lahiri ayanamsha at a Julian Day
    Ayanamsha {
        /// Julian Date UT
        jd: f64,
    },
    /// Vikram Samvat year for a civil year
    Samvat {
        /// Civil (Gregorian) year
        year: i32,
    },
    /// Full panchanga from explicit longitudes
    Panchang {
        /// Local datetime (YYYY-MM-DDThh:mm)
        #[arg(long)]
        date: String,
        /// Timezone offset from UTC in hours (east positive)
        #[arg(long, default_value = "0")]
        tz: f64,
        /// Sun tropical ecliptic longitude in degrees
        #[arg(long)]
        sun: f64,
        /// Moon tropical ecliptic longitude in degrees
        #[arg(long)]
        moon: f64,
        /// Ascendant tropical ecliptic longitude in degrees
        #[arg(long)]
        asc: f64,
        /// Observer latitude in degrees, north positive
        #[arg(long, default_value = "23.1765")]
        lat: f64,
        /// Observer longitude in degrees, east positive
        #[arg(long, default_value = "75.7885")]
        lon: f64,
        /// Express longitude-anchored elements in the Lahiri sidereal zodiac
        #[arg(long)]
        sidereal: bool,
        /// Report the lunisolar month instead of the solar one
        #[arg(long)]
        lunisolar: bool,
        /// Use the Equal house system for the ascendant
        #[arg(long)]
        equal_houses: bool,
    },
}

/// Provider that reports caller-supplied longitudes for any instant.
struct FixedProvider {
    sun: f64,
    moon: f64,
    ascendant: f64,
}

impl Ephemeris for FixedProvider {
    fn longitude(&self, body: Body, _jd_ut: f64) -> Result<f64, EphemerisError> {
        Ok(match body {
            Body::Sun => self.sun,
            Body::Moon => self.moon,
        })
    }

    fn ascendant(
        &self,
        _jd_ut: f64,
        _location: &GeoLocation,
        _house_system: HouseSystem,
    ) -> Result<f64, EphemerisError> {
        Ok(self.ascendant)
    }
}

fn parse_local(s: &str) -> Result<CivilDateTime, String> {
    // Parse "YYYY-MM-DDThh:mm"
    let parts: Vec<&str> = s.split('T').collect();
    if parts.len() != 2 {
        return Err(format!("expected YYYY-MM-DDThh:mm, got {s}"));
    }
    let date_parts: Vec<&str> = parts[0].split('-').collect();
    let time_parts: Vec<&str> = parts[1].split(':').collect();
    if date_parts.len() != 3 || time_parts.len() != 2 {
        return Err(format!("invalid date/time format: {s}"));
    }
    let year: i32 = date_parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = date_parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = date_parts[2].parse().map_err(|e| format!("{e}"))?;
    let hour: u32 = time_parts[0].parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = time_parts[1].parse().map_err(|e| format!("{e}"))?;
    let dt = CivilDateTime::new(year, month, day, hour, minute);
    dt.validate().map_err(|e| format!("{e}"))?;
    Ok(dt)
}

fn require_local(s: &str) -> CivilDateTime {
    parse_local(s).unwrap_or_else(|e| {
        eprintln!("Invalid datetime: {e}");
        std::process::exit(1);
    })
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tithi { sun, moon } => {
            let info = tithi_from_elongation(angular_difference(moon, sun));
            println!(
                "{} ({} paksha, number {}, index {}) - {:.4} deg in tithi",
                info.tithi.display_name(info.paksha),
                info.paksha.name(),
                info.tithi_number,
                info.tithi_index,
                info.degrees_in_tithi
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}) - Pada {}, lord {} ({:.4} deg in nakshatra)",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.lord.name(),
                info.degrees_in_nakshatra
            );
        }

        Commands::Yoga { sun, moon } => {
            let info = yoga_from_sum(sun + moon);
            println!(
                "{} (index {}) - {:.4} deg in yoga",
                info.yoga.name(),
                info.yoga_index,
                info.degrees_in_yoga
            );
        }

        Commands::Karana { sun, moon } => {
            let info = karana_from_elongation(angular_difference(moon, sun));
            println!(
                "{} (number {}) - {:.4} deg in karana",
                info.karana.name(),
                info.karana_number,
                info.degrees_in_karana
            );
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            println!(
                "{} ({}) - index {} ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                info.rashi_index,
                info.degrees_in_rashi
            );
        }

        Commands::Jd { date, tz } => {
            let dt = require_local(&date);
            match dt.to_jd_ut(tz) {
                Ok(jd) => println!("JD(UT) = {jd:.6}"),
                Err(e) => {
                    eprintln!("Conversion failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Ayanamsha { jd } => {
            let aya = ZodiacMode::LahiriSidereal.ayanamsha_deg(jd);
            println!("Lahiri ayanamsha: {aya:.6} deg");
        }

        Commands::Samvat { year } => {
            println!("Vikram Samvat {}", vikram_samvat_from_civil_year(year));
        }

        Commands::Panchang {
            date,
            tz,
            sun,
            moon,
            asc,
            lat,
            lon,
            sidereal,
            lunisolar,
            equal_houses,
        } => {
            let dt = require_local(&date);
            let provider = FixedProvider {
                sun,
                moon,
                ascendant: asc,
            };
            let location = GeoLocation::new(lat, lon);
            let options = PanchangOptions {
                house_system: if equal_houses {
                    HouseSystem::Equal
                } else {
                    HouseSystem::Placidus
                },
                zodiac: if sidereal {
                    ZodiacMode::LahiriSidereal
                } else {
                    ZodiacMode::Tropical
                },
                month_convention: if lunisolar {
                    MonthConvention::Lunisolar
                } else {
                    MonthConvention::Solar
                },
                include_tithi_trend: true,
            };

            let result = compute_panchang(&provider, &dt, tz, &location, &options)
                .unwrap_or_else(|e| {
                    eprintln!("Derivation failed: {e}");
                    std::process::exit(1);
                });

            println!(
                "Tithi:     {} ({} paksha, number {})",
                result.tithi.display_name(result.paksha),
                result.paksha.name(),
                result.tithi_number
            );
            if let Some(trend) = result.tithi_trend {
                println!("Trend:     {}", trend.name());
            }
            println!(
                "Nakshatra: {} (pada {}, lord {})",
                result.nakshatra.name(),
                result.nakshatra_pada,
                result.nakshatra_lord.name()
            );
            println!("Yoga:      {}", result.yoga.name());
            println!(
                "Karana:    {} (number {})",
                result.karana.name(),
                result.karana_number
            );
            println!(
                "Chandra:   {} ({})",
                result.chandra_rashi.name(),
                result.chandra_rashi.western_name()
            );
            println!(
                "Lagna:     {} ({})",
                result.lagna_rashi.name(),
                result.lagna_rashi.western_name()
            );
            let masa_label = if result.masa.adhika { "Adhika " } else { "" };
            println!("Masa:      {}{}", masa_label, result.masa.rashi.name());
            println!("Samvat:    {}", result.vikram_samvat);
        }
    }
}
