//! Human-readable rendering of a [`Report`].

use std::fmt;

use crate::model::Report;

const COMPASS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// 16-point compass label for a bearing in degrees. Out-of-range bearings wrap.
pub fn compass_direction(degrees: f64) -> &'static str {
    let bucket = (degrees.rem_euclid(360.0) / 22.5).round() as usize;
    COMPASS[bucket % COMPASS.len()]
}

/// Text for an Open-Meteo (WMO) weather code.
/// See: https://open-meteo.com/en/docs#weathervariables
pub fn weather_description(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}

pub fn fahrenheit_to_celsius(temp_f: f64) -> f64 {
    (temp_f - 32.0) * 5.0 / 9.0
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cw = &self.current;

        writeln!(f, "Current weather for {}:", self.address)?;
        writeln!(
            f,
            "Temperature: {}°F ({:.1}°C)",
            cw.temperature_f,
            fahrenheit_to_celsius(cw.temperature_f)
        )?;
        writeln!(f, "Wind speed: {} mph", cw.windspeed_mph)?;
        writeln!(f, "Wind direction: {}", compass_direction(cw.winddirection_deg))?;
        writeln!(f, "Condition: {}", weather_description(cw.weathercode))?;
        write!(f, "Chance of precipitation: {}%", self.precipitation_probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CurrentWeather;

    #[test]
    fn cardinal_points() {
        assert_eq!(compass_direction(0.0), "N");
        assert_eq!(compass_direction(90.0), "E");
        assert_eq!(compass_direction(180.0), "S");
        assert_eq!(compass_direction(270.0), "W");
        assert_eq!(compass_direction(360.0), "N");
    }

    #[test]
    fn bucket_edges_round_up() {
        assert_eq!(compass_direction(11.24), "N");
        assert_eq!(compass_direction(11.25), "NNE");
        assert_eq!(compass_direction(348.74), "NNW");
        assert_eq!(compass_direction(348.75), "N");
    }

    #[test]
    fn every_bearing_maps_to_a_label_and_wraps() {
        for d in 0..360 {
            let d = f64::from(d);
            let label = compass_direction(d);
            assert!(COMPASS.contains(&label));
            assert_eq!(label, compass_direction(d + 360.0), "bearing {d}");
        }
    }

    #[test]
    fn negative_bearings_wrap() {
        assert_eq!(compass_direction(-90.0), "W");
        assert_eq!(compass_direction(-22.5), "NNW");
    }

    #[test]
    fn known_and_unknown_codes() {
        assert_eq!(weather_description(0), "Clear sky");
        assert_eq!(weather_description(45), "Fog");
        assert_eq!(weather_description(82), "Violent rain showers");
        assert_eq!(weather_description(95), "Thunderstorm");
        assert_eq!(weather_description(99), "Thunderstorm with heavy hail");
        assert_eq!(weather_description(4), "Unknown");
        assert_eq!(weather_description(100), "Unknown");
        assert_eq!(weather_description(-1), "Unknown");
    }

    #[test]
    fn every_wmo_code_has_its_exact_text() {
        let table = [
            (0, "Clear sky"),
            (1, "Mainly clear"),
            (2, "Partly cloudy"),
            (3, "Overcast"),
            (45, "Fog"),
            (48, "Depositing rime fog"),
            (51, "Light drizzle"),
            (53, "Moderate drizzle"),
            (55, "Dense drizzle"),
            (56, "Light freezing drizzle"),
            (57, "Dense freezing drizzle"),
            (61, "Slight rain"),
            (63, "Moderate rain"),
            (65, "Heavy rain"),
            (66, "Light freezing rain"),
            (67, "Heavy freezing rain"),
            (71, "Slight snow fall"),
            (73, "Moderate snow fall"),
            (75, "Heavy snow fall"),
            (77, "Snow grains"),
            (80, "Slight rain showers"),
            (81, "Moderate rain showers"),
            (82, "Violent rain showers"),
            (85, "Slight snow showers"),
            (86, "Heavy snow showers"),
            (95, "Thunderstorm"),
            (96, "Thunderstorm with slight hail"),
            (99, "Thunderstorm with heavy hail"),
        ];

        for (code, text) in table {
            assert_eq!(weather_description(code), text, "code {code}");
        }

        let known = (-1..=100)
            .filter(|c| weather_description(*c) != "Unknown")
            .count();
        assert_eq!(known, table.len());
    }

    #[test]
    fn celsius_conversion() {
        assert_eq!(format!("{:.1}", fahrenheit_to_celsius(32.0)), "0.0");
        assert_eq!(format!("{:.1}", fahrenheit_to_celsius(212.0)), "100.0");
        assert_eq!(format!("{:.1}", fahrenheit_to_celsius(98.6)), "37.0");
        assert_eq!(format!("{:.1}", fahrenheit_to_celsius(60.0)), "15.6");
    }

    #[test]
    fn renders_report() {
        let report = Report {
            address: "San Francisco, CA, USA".to_string(),
            current: CurrentWeather {
                temperature_f: 60.0,
                windspeed_mph: 5.0,
                winddirection_deg: 180.0,
                weathercode: 0,
                time: Some("2024-01-01T12:00".to_string()),
            },
            precipitation_probability: 10,
        };

        let expected = "Current weather for San Francisco, CA, USA:\n\
                        Temperature: 60°F (15.6°C)\n\
                        Wind speed: 5 mph\n\
                        Wind direction: S\n\
                        Condition: Clear sky\n\
                        Chance of precipitation: 10%";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn fractional_readings_keep_their_precision() {
        let report = Report {
            address: "Reykjavík, Iceland".to_string(),
            current: CurrentWeather {
                temperature_f: 28.4,
                windspeed_mph: 17.3,
                winddirection_deg: 315.0,
                weathercode: 73,
                time: Some("2024-01-01T12:00".to_string()),
            },
            precipitation_probability: 0,
        };

        let text = report.to_string();
        assert!(text.contains("Temperature: 28.4°F (-2.0°C)"));
        assert!(text.contains("Wind speed: 17.3 mph"));
        assert!(text.contains("Wind direction: NW"));
        assert!(text.contains("Condition: Moderate snow fall"));
        assert!(text.ends_with("Chance of precipitation: 0%"));
    }
}
