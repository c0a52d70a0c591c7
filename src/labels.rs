//! Heading and message text for rendered pages and the summary index.

use clap::ValueEnum;

/// Output language for generated headings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Lang {
    #[default]
    En,
    /// Slovak, the headings of the existing generated pages
    Sk,
}

#[derive(Debug)]
pub struct Labels {
    pub module: &'static str,
    pub description: &'static str,
    pub note: &'static str,
    pub parameters: &'static str,
    pub inputs: &'static str,
    pub outputs: &'static str,
    pub inouts: &'static str,
    pub code_samples: &'static str,
    pub usage_examples: &'static str,
    pub no_docs: &'static str,
    pub col_name: &'static str,
    pub col_description: &'static str,
    pub index_title: &'static str,
    pub index_list: &'static str,
    pub col_module: &'static str,
    pub col_source: &'static str,
}

static EN: Labels = Labels {
    module: "Module",
    description: "Description",
    note: "Note",
    parameters: "Parameters",
    inputs: "Inputs (input)",
    outputs: "Outputs (output)",
    inouts: "Bidirectional (inout)",
    code_samples: "Code samples",
    usage_examples: "Usage examples",
    no_docs: "No module documentation.",
    col_name: "Name",
    col_description: "Description",
    index_title: "Module documentation",
    index_list: "Modules",
    col_module: "Module",
    col_source: "Source file",
};

static SK: Labels = Labels {
    module: "Modul",
    description: "Popis",
    note: "Poznámka",
    parameters: "Parametre",
    inputs: "Vstupy (input)",
    outputs: "Výstupy (output)",
    inouts: "Obojsmerné (inout)",
    code_samples: "Príklady kódu",
    usage_examples: "Príklady použitia",
    no_docs: "Žiadna dokumentácia k modulu.",
    col_name: "Názov",
    col_description: "Popis",
    index_title: "Dokumentácia modulov",
    index_list: "Zoznam",
    col_module: "Názov modulu",
    col_source: "Zdrojový súbor",
};

impl Lang {
    pub fn labels(self) -> &'static Labels {
        match self {
            Lang::En => &EN,
            Lang::Sk => &SK,
        }
    }
}
