use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexName {
    Dax,
    DowJones,
    Sp500,
    Nikkei,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexConstituent {
    pub symbol: &'static str,
    pub display_name: &'static str,
}

impl IndexName {
    pub const ALL: [IndexName; 4] = [
        IndexName::Dax,
        IndexName::DowJones,
        IndexName::Sp500,
        IndexName::Nikkei,
    ];

    pub fn label(self) -> &'static str {
        match self {
            IndexName::Dax => "DAX",
            IndexName::DowJones => "Dow Jones",
            IndexName::Sp500 => "S&P 500",
            IndexName::Nikkei => "Nikkei",
        }
    }

    pub fn constituents(self) -> &'static [IndexConstituent] {
        match self {
            IndexName::Dax => DAX,
            IndexName::DowJones => DOW_JONES,
            IndexName::Sp500 => SP500,
            IndexName::Nikkei => NIKKEI,
        }
    }
}

impl fmt::Display for IndexName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for IndexName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_uppercase();
        match key.as_str() {
            "DAX" => Ok(IndexName::Dax),
            "DOW" | "DOWJONES" | "DJI" | "DJIA" => Ok(IndexName::DowJones),
            "SP500" | "SPX" => Ok(IndexName::Sp500),
            "NIKKEI" | "NIKKEI225" | "N225" => Ok(IndexName::Nikkei),
            _ => anyhow::bail!("unknown index: {s} (expected one of DAX, DowJones, SP500, Nikkei)"),
        }
    }
}

macro_rules! constituents {
    ($($symbol:literal => $name:literal),* $(,)?) => {
        &[$(IndexConstituent { symbol: $symbol, display_name: $name }),*]
    };
}

static DAX: &[IndexConstituent] = constituents![
    "ADS.DE" => "Adidas",
    "AIR.DE" => "Airbus",
    "ALV.DE" => "Allianz",
    "BAS.DE" => "BASF",
    "BAYN.DE" => "Bayer",
    "BEI.DE" => "Beiersdorf",
    "BMW.DE" => "BMW",
    "BNR.DE" => "Brenntag",
    "CBK.DE" => "Commerzbank",
    "CON.DE" => "Continental",
    "DTG.DE" => "Daimler Truck",
    "DBK.DE" => "Deutsche Bank",
    "DB1.DE" => "Deutsche Börse",
    "DHL.DE" => "DHL Group",
    "DTE.DE" => "Deutsche Telekom",
    "EOAN.DE" => "E.ON",
    "FRE.DE" => "Fresenius",
    "FME.DE" => "Fresenius Medical Care",
    "G1A.DE" => "GEA Group",
    "HNR1.DE" => "Hannover Rück",
    "HEI.DE" => "Heidelberg Materials",
    "HEN3.DE" => "Henkel",
    "IFX.DE" => "Infineon",
    "MBG.DE" => "Mercedes-Benz Group",
    "MRK.DE" => "Merck KGaA",
    "MTX.DE" => "MTU Aero Engines",
    "MUV2.DE" => "Münchener Rück",
    "P911.DE" => "Porsche AG",
    "PAH3.DE" => "Porsche SE",
    "QIA.DE" => "Qiagen",
    "RHM.DE" => "Rheinmetall",
    "RWE.DE" => "RWE",
    "SAP.DE" => "SAP",
    "SRT3.DE" => "Sartorius",
    "SIE.DE" => "Siemens",
    "ENR.DE" => "Siemens Energy",
    "SHL.DE" => "Siemens Healthineers",
    "SY1.DE" => "Symrise",
    "VOW3.DE" => "Volkswagen",
    "VNA.DE" => "Vonovia",
    "ZAL.DE" => "Zalando",
];

static DOW_JONES: &[IndexConstituent] = constituents![
    "AAPL" => "Apple",
    "AMGN" => "Amgen",
    "AMZN" => "Amazon",
    "AXP" => "American Express",
    "BA" => "Boeing",
    "CAT" => "Caterpillar",
    "CRM" => "Salesforce",
    "CSCO" => "Cisco",
    "CVX" => "Chevron",
    "DIS" => "Disney",
    "GS" => "Goldman Sachs",
    "HD" => "Home Depot",
    "HON" => "Honeywell",
    "IBM" => "IBM",
    "JNJ" => "Johnson & Johnson",
    "JPM" => "JPMorgan Chase",
    "KO" => "Coca-Cola",
    "MCD" => "McDonald's",
    "MMM" => "3M",
    "MRK" => "Merck & Co.",
    "MSFT" => "Microsoft",
    "NKE" => "Nike",
    "NVDA" => "Nvidia",
    "PG" => "Procter & Gamble",
    "SHW" => "Sherwin-Williams",
    "TRV" => "Travelers",
    "UNH" => "UnitedHealth",
    "V" => "Visa",
    "VZ" => "Verizon",
    "WMT" => "Walmart",
];

static SP500: &[IndexConstituent] = constituents![
    "AAPL" => "Apple Inc.",
    "MSFT" => "Microsoft Corp.",
    "NVDA" => "NVIDIA Corp.",
    "AMZN" => "Amazon.com Inc.",
    "META" => "Meta Platforms",
    "GOOGL" => "Alphabet Class A",
    "GOOG" => "Alphabet Class C",
    "BRK-B" => "Berkshire Hathaway",
    "AVGO" => "Broadcom",
    "TSLA" => "Tesla",
    "LLY" => "Eli Lilly",
    "JPM" => "JPMorgan Chase & Co.",
    "V" => "Visa Inc.",
    "UNH" => "UnitedHealth Group",
    "XOM" => "Exxon Mobil",
    "MA" => "Mastercard",
    "JNJ" => "Johnson & Johnson",
    "PG" => "Procter & Gamble Co.",
    "COST" => "Costco",
    "HD" => "Home Depot Inc.",
    "ABBV" => "AbbVie",
    "MRK" => "Merck & Co. Inc.",
    "ORCL" => "Oracle",
    "CVX" => "Chevron Corp.",
    "KO" => "Coca-Cola Co.",
    "PEP" => "PepsiCo",
    "BAC" => "Bank of America",
    "ADBE" => "Adobe",
    "CRM" => "Salesforce Inc.",
    "NFLX" => "Netflix",
    "AMD" => "Advanced Micro Devices",
    "TMO" => "Thermo Fisher Scientific",
    "WMT" => "Walmart Inc.",
    "MCD" => "McDonald's Corp.",
    "CSCO" => "Cisco Systems",
    "ABT" => "Abbott Laboratories",
    "ACN" => "Accenture",
    "LIN" => "Linde",
    "INTC" => "Intel",
    "QCOM" => "Qualcomm",
    "TXN" => "Texas Instruments",
    "PFE" => "Pfizer",
    "T" => "AT&T",
    "IBM" => "International Business Machines",
    "CAT" => "Caterpillar Inc.",
    "GS" => "Goldman Sachs Group",
    "BA" => "Boeing Co.",
    "DIS" => "Walt Disney Co.",
    "NKE" => "Nike Inc.",
    "VZ" => "Verizon Communications",
];

static NIKKEI: &[IndexConstituent] = constituents![
    "7203.T" => "Toyota Motor",
    "6758.T" => "Sony Group",
    "9984.T" => "SoftBank Group",
    "6861.T" => "Keyence",
    "8035.T" => "Tokyo Electron",
    "9983.T" => "Fast Retailing",
    "6098.T" => "Recruit Holdings",
    "4063.T" => "Shin-Etsu Chemical",
    "8306.T" => "Mitsubishi UFJ Financial",
    "6501.T" => "Hitachi",
    "7974.T" => "Nintendo",
    "4502.T" => "Takeda Pharmaceutical",
    "6367.T" => "Daikin Industries",
    "9432.T" => "NTT",
    "9433.T" => "KDDI",
    "8058.T" => "Mitsubishi Corp.",
    "8031.T" => "Mitsui & Co.",
    "7267.T" => "Honda Motor",
    "6902.T" => "Denso",
    "4519.T" => "Chugai Pharmaceutical",
    "6954.T" => "Fanuc",
    "6981.T" => "Murata Manufacturing",
    "4568.T" => "Daiichi Sankyo",
    "8766.T" => "Tokio Marine",
    "8316.T" => "Sumitomo Mitsui Financial",
    "7741.T" => "Hoya",
    "6594.T" => "Nidec",
    "4661.T" => "Oriental Land",
    "6273.T" => "SMC",
    "2914.T" => "Japan Tobacco",
];
