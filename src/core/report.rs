use crate::domain::model::{Client, Plan};
use crate::utils::error::Result;
use csv::WriterBuilder;

const LIST_SEPARATOR: &str = "; ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    fn delimiter(self) -> u8 {
        match self {
            ExportFormat::Csv => b',',
            ExportFormat::Tsv => b'\t',
        }
    }
}

pub fn export_plans(plans: &[Plan], format: ExportFormat) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(format.delimiter())
        .from_writer(Vec::new());

    writer.write_record([
        "id",
        "name",
        "price",
        "services",
        "description",
        "clientCount",
        "revenue",
    ])?;
    for plan in plans {
        let price = plan.price.to_string();
        let services = plan.services.join(LIST_SEPARATOR);
        let client_count = plan.client_count.to_string();
        let revenue = plan.revenue.to_string();
        writer.write_record([
            plan.id.as_str(),
            plan.name.as_str(),
            price.as_str(),
            services.as_str(),
            plan.description.as_str(),
            client_count.as_str(),
            revenue.as_str(),
        ])?;
    }

    finish(writer)
}

pub fn export_clients(clients: &[Client], format: ExportFormat) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(format.delimiter())
        .from_writer(Vec::new());

    writer.write_record(["id", "name", "email", "pets", "plan", "joinDate"])?;
    for client in clients {
        let pets = client.pets.join(LIST_SEPARATOR);
        let join_date = client.join_date.to_string();
        writer.write_record([
            client.id.as_str(),
            client.name.as_str(),
            client.email.as_str(),
            pets.as_str(),
            client.plan.as_str(),
            join_date.as_str(),
        ])?;
    }

    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
