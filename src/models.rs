use serde::Deserialize;

/// Federative unit (state) as returned by the IBGE localities API.
///
/// The API returns more fields (numeric id, region object); only the two
/// this application displays and forwards are kept.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Uf {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "sigla")]
    pub abbreviation: String,
}

impl Uf {
    /// Label shown in the state selector, e.g. "São Paulo (SP)".
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.abbreviation)
    }
}

/// Municipality as returned by the IBGE localities API.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct City {
    #[serde(rename = "nome")]
    pub name: String,
}

/// Which remote list a fetch belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchKind {
    States,
    Cities,
}

impl FetchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchKind::States => "states",
            FetchKind::Cities => "cities",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uf_wire_format() {
        // Trimmed-down sample of GET /estados; extra fields are ignored
        let json = r#"[
            {"id":35,"sigla":"SP","nome":"São Paulo","regiao":{"id":3,"sigla":"SE","nome":"Sudeste"}},
            {"id":33,"sigla":"RJ","nome":"Rio de Janeiro","regiao":{"id":3,"sigla":"SE","nome":"Sudeste"}}
        ]"#;
        let ufs: Vec<Uf> = serde_json::from_str(json).unwrap();
        assert_eq!(ufs.len(), 2);
        assert_eq!(ufs[0].name, "São Paulo");
        assert_eq!(ufs[0].abbreviation, "SP");
    }

    #[test]
    fn test_parse_city_wire_format() {
        let json = r#"[{"id":3550308,"nome":"São Paulo"},{"id":3509502,"nome":"Campinas"}]"#;
        let cities: Vec<City> = serde_json::from_str(json).unwrap();
        assert_eq!(cities.len(), 2);
        assert_eq!(cities[1].name, "Campinas");
    }

    #[test]
    fn test_uf_label() {
        let uf = Uf {
            name: String::from("São Paulo"),
            abbreviation: String::from("SP"),
        };
        assert_eq!(uf.label(), "São Paulo (SP)");
    }
}
