use crate::config::Config;
use color_eyre::eyre::{bail, eyre, Result};
use molgrid::Molecule;
use nalgebra::Vector3;
use periodic_table_on_an_enum::Element;
use tracing::info;

/// Build the molecule defined in the YAML configuration, in Bohr.
pub fn build_molecule(config: &Config) -> Result<Molecule> {
    if config.geometry.is_empty() {
        bail!("Geometry contains no atoms");
    }

    let mut elements = Vec::with_capacity(config.geometry.len());
    let mut coords = Vec::with_capacity(config.geometry.len());
    for atom in &config.geometry {
        let element = Element::from_symbol(&atom.element)
            .ok_or_else(|| eyre!("Invalid element symbol: {}", atom.element))?;
        elements.push(element);
        coords.push(Vector3::from(atom.coords));
    }

    let mol = if config.is_bohr() {
        Molecule::new(elements, coords)
    } else {
        Molecule::from_angstrom(elements, coords)
    };
    let mol = mol.with_charge(config.charge.unwrap_or(0));

    info!("Geometry (Bohr):");
    for (ia, c) in mol.coords.iter().enumerate() {
        info!(
            "  Atom {:>2} {:>2}: [{:+.6}, {:+.6}, {:+.6}]",
            ia + 1,
            mol.atom_symbol(ia),
            c.x,
            c.y,
            c.z
        );
    }
    Ok(mol)
}
