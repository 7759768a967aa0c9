use crate::proteomic::models::mass;

/// name, one letter code, three letter code, monoisotopic residue mass, canonical
type AminoAcidTupel = (&'static str, char, &'static str, f64, bool);

const A: AminoAcidTupel = ("Alanine", 'A', "Ala", 71.03711, true);
/** B is an average between N and D */
const B: AminoAcidTupel = ("Asparagine or aspartic acid", 'B', "Asx", 114.53495, false);
const R: AminoAcidTupel = ("Arginine", 'R', "Arg", 156.10111, true);
const N: AminoAcidTupel = ("Asparagine", 'N', "Asn", 114.04293, true);
const D: AminoAcidTupel = ("Aspartic acid", 'D', "Asp", 115.02694, true);
const C: AminoAcidTupel = ("Cysteine", 'C', "Cys", 103.00919, true);
const E: AminoAcidTupel = ("Glutamic acid", 'E', "Glu", 129.04259, true);
const Q: AminoAcidTupel = ("Glutamine", 'Q', "Gln", 128.05858, true);
const G: AminoAcidTupel = ("Glycine", 'G', "Gly", 57.02146, true);
const H: AminoAcidTupel = ("Histidine", 'H', "His", 137.05891, true);
const I: AminoAcidTupel = ("Isoleucine", 'I', "Ile", 113.08406, true);
const L: AminoAcidTupel = ("Leucine", 'L', "Leu", 113.08406, true);
const J: AminoAcidTupel = ("Isoleucine or Leucine", 'J', "Xle", 113.08406, false);
const K: AminoAcidTupel = ("Lysine", 'K', "Lys", 128.09496, true);
const M: AminoAcidTupel = ("Methionine", 'M', "Met", 131.04049, true);
const F: AminoAcidTupel = ("Phenylalanine", 'F', "Phe", 147.06841, true);
const P: AminoAcidTupel = ("Proline", 'P', "Pro", 97.05276, true);
const O: AminoAcidTupel = ("Pyrrolysine", 'O', "Pyl", 237.14773, false);
const S: AminoAcidTupel = ("Serine", 'S', "Ser", 87.03203, true);
const T: AminoAcidTupel = ("Threonine", 'T', "Thr", 101.04768, true);
const U: AminoAcidTupel = ("Selenocysteine", 'U', "Sec", 150.95363, false);
const V: AminoAcidTupel = ("Valine", 'V', "Val", 99.06841, true);
const W: AminoAcidTupel = ("Tryptophan", 'W', "Trp", 186.07931, true);
/** Some search engines and databases use X for unknown amino acids */
const X: AminoAcidTupel = ("Unknown amino acid", 'X', "Xaa", 0.0, false);
const Y: AminoAcidTupel = ("Tyrosine", 'Y', "Tyr", 163.06333, true);
/** Z is an average between E and Q */
const Z: AminoAcidTupel = ("Glutamine or glutamic acid", 'Z', "Glx", 128.55059, false);

/// The 20 residues a normalized sequence may consist of.
pub const CANONICAL_ONE_LETTER_CODES: [char; 20] = [
    'A', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W', 'Y'
];

#[derive(Debug, Clone, PartialEq)]
pub struct AminoAcid {
    three_letter_code: &'static str,
    mono_mass: i64,
    is_canonical: bool
}

impl AminoAcid {
    fn new(amino_acid_tupel: AminoAcidTupel) -> AminoAcid {
        return AminoAcid {
            three_letter_code: amino_acid_tupel.2,
            mono_mass: mass::convert_mass_to_int(amino_acid_tupel.3),
            is_canonical: amino_acid_tupel.4
        }
    }

    pub fn get_three_letter_code(&self) -> &'static str {
        return self.three_letter_code;
    }

    pub fn get_mono_mass(&self) -> i64 {
        return self.mono_mass;
    }

    pub fn is_canonical(&self) -> bool {
        return self.is_canonical;
    }

    /// Looks up a residue by its one letter code, case-insensitively.
    /// Letters without an entry resolve to X.
    pub fn get(one_letter_code: char) -> AminoAcid {
        match one_letter_code.to_ascii_uppercase() {
            'A' => return AminoAcid::new(A),
            'B' => return AminoAcid::new(B),
            'R' => return AminoAcid::new(R),
            'N' => return AminoAcid::new(N),
            'D' => return AminoAcid::new(D),
            'C' => return AminoAcid::new(C),
            'E' => return AminoAcid::new(E),
            'Q' => return AminoAcid::new(Q),
            'G' => return AminoAcid::new(G),
            'H' => return AminoAcid::new(H),
            'I' => return AminoAcid::new(I),
            'L' => return AminoAcid::new(L),
            'J' => return AminoAcid::new(J),
            'K' => return AminoAcid::new(K),
            'M' => return AminoAcid::new(M),
            'F' => return AminoAcid::new(F),
            'P' => return AminoAcid::new(P),
            'O' => return AminoAcid::new(O),
            'S' => return AminoAcid::new(S),
            'T' => return AminoAcid::new(T),
            'U' => return AminoAcid::new(U),
            'V' => return AminoAcid::new(V),
            'W' => return AminoAcid::new(W),
            'X' => return AminoAcid::new(X),
            'Y' => return AminoAcid::new(Y),
            'Z' => return AminoAcid::new(Z),
            _ => return AminoAcid::new(X)
        }
    }

    pub fn is_canonical_code(one_letter_code: char) -> bool {
        return CANONICAL_ONE_LETTER_CODES.contains(&one_letter_code);
    }

    /// Monoisotopic mass difference (Da) when `from` is replaced by `to`.
    /// A missing residue contributes no mass.
    pub fn get_mass_shift(from: Option<char>, to: Option<char>) -> f64 {
        let from_mass: i64 = from.map_or(0, |code| AminoAcid::get(code).get_mono_mass());
        let to_mass: i64 = to.map_or(0, |code| AminoAcid::get(code).get_mono_mass());
        return mass::convert_mass_to_float(to_mass - from_mass);
    }
}
