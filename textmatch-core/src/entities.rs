//! Entity tables for SGML decoding and encoding.
//!
//! HTML 4 entities, ISO Latin-2 (Latin Extended-A) entities, the ASCII
//! delimiter entities used by [`Escape`](crate::sgml::Escape) and a few composed
//! base-plus-mark sequences.

use phf::phf_map;

/// Entity name → decoded characters.
pub static ENTITIES: phf::Map<&'static str, &'static str> = phf_map! {
    "Aacute" => "\u{00c1}",
    "aacute" => "\u{00e1}",
    "Abreve" => "\u{0102}",
    "abreve" => "\u{0103}",
    "Acirc" => "\u{00c2}",
    "acirc" => "\u{00e2}",
    "acute" => "\u{00b4}",
    "AElig" => "\u{00c6}",
    "aelig" => "\u{00e6}",
    "Agrave" => "\u{00c0}",
    "agrave" => "\u{00e0}",
    "alefsym" => "\u{2135}",
    "Alpha" => "\u{0391}",
    "alpha" => "\u{03b1}",
    "Amacr" => "\u{0100}",
    "amacr" => "\u{0101}",
    "amp" => "&",
    "and" => "\u{2227}",
    "ang" => "\u{2220}",
    "Aogon" => "\u{0104}",
    "aogon" => "\u{0105}",
    "apos" => "'",
    "Aring" => "\u{00c5}",
    "aring" => "\u{00e5}",
    "asymp" => "\u{2248}",
    "Atilde" => "\u{00c3}",
    "atilde" => "\u{00e3}",
    "Auml" => "\u{00c4}",
    "auml" => "\u{00e4}",
    "bdquo" => "\u{201e}",
    "Beta" => "\u{0392}",
    "beta" => "\u{03b2}",
    "brvbar" => "\u{00a6}",
    "bsol" => "\\",
    "bull" => "\u{2022}",
    "Cacute" => "\u{0106}",
    "cacute" => "\u{0107}",
    "cap" => "\u{2229}",
    "Ccaron" => "\u{010c}",
    "ccaron" => "\u{010d}",
    "Ccedil" => "\u{00c7}",
    "ccedil" => "\u{00e7}",
    "Ccirc" => "\u{0108}",
    "ccirc" => "\u{0109}",
    "Cdot" => "\u{010a}",
    "cdot" => "\u{010b}",
    "cedil" => "\u{00b8}",
    "cent" => "\u{00a2}",
    "Chi" => "\u{03a7}",
    "chi" => "\u{03c7}",
    "circ" => "\u{02c6}",
    "clubs" => "\u{2663}",
    "commat" => "@",
    "cong" => "\u{2245}",
    "copy" => "\u{00a9}",
    "crarr" => "\u{21b5}",
    "cup" => "\u{222a}",
    "curren" => "\u{00a4}",
    "Dagger" => "\u{2021}",
    "dagger" => "\u{2020}",
    "dArr" => "\u{21d3}",
    "darr" => "\u{2193}",
    "Dcaron" => "\u{010e}",
    "dcaron" => "\u{010f}",
    "deg" => "\u{00b0}",
    "Delta" => "\u{0394}",
    "delta" => "\u{03b4}",
    "diams" => "\u{2666}",
    "divide" => "\u{00f7}",
    "dollar" => "$",
    "Dstrok" => "\u{0110}",
    "dstrok" => "\u{0111}",
    "Eacute" => "\u{00c9}",
    "eacute" => "\u{00e9}",
    "Ecaron" => "\u{011a}",
    "ecaron" => "\u{011b}",
    "Ecirc" => "\u{00ca}",
    "ecirc" => "\u{00ea}",
    "Edot" => "\u{0116}",
    "edot" => "\u{0117}",
    "Egrave" => "\u{00c8}",
    "egrave" => "\u{00e8}",
    "Emacr" => "\u{0112}",
    "emacr" => "\u{0113}",
    "empty" => "\u{2205}",
    "emsp" => "\u{2003}",
    "ENG" => "\u{014a}",
    "eng" => "\u{014b}",
    "ensp" => "\u{2002}",
    "Eogon" => "\u{0118}",
    "eogon" => "\u{0119}",
    "Epsilon" => "\u{0395}",
    "epsilon" => "\u{03b5}",
    "equiv" => "\u{2261}",
    "Eta" => "\u{0397}",
    "eta" => "\u{03b7}",
    "ETH" => "\u{00d0}",
    "eth" => "\u{00f0}",
    "Euml" => "\u{00cb}",
    "euml" => "\u{00eb}",
    "euro" => "\u{20ac}",
    "exist" => "\u{2203}",
    "fnof" => "\u{0192}",
    "forall" => "\u{2200}",
    "frac12" => "\u{00bd}",
    "frac14" => "\u{00bc}",
    "frac34" => "\u{00be}",
    "frasl" => "\u{2044}",
    "Gamma" => "\u{0393}",
    "gamma" => "\u{03b3}",
    "Gbreve" => "\u{011e}",
    "gbreve" => "\u{011f}",
    "Gcedil" => "\u{0122}",
    "Gcirc" => "\u{011c}",
    "gcirc" => "\u{011d}",
    "Gdot" => "\u{0120}",
    "gdot" => "\u{0121}",
    "ge" => "\u{2265}",
    "gt" => ">",
    "hacute" => "h\u{0301}",
    "hArr" => "\u{21d4}",
    "harr" => "\u{2194}",
    "Hcirc" => "\u{0124}",
    "hcirc" => "\u{0125}",
    "hearts" => "\u{2665}",
    "hellip" => "\u{2026}",
    "Hstrok" => "\u{0126}",
    "hstrok" => "\u{0127}",
    "Iacute" => "\u{00cd}",
    "iacute" => "\u{00ed}",
    "Icirc" => "\u{00ce}",
    "icirc" => "\u{00ee}",
    "Idot" => "\u{0130}",
    "iexcl" => "\u{00a1}",
    "Igrave" => "\u{00cc}",
    "igrave" => "\u{00ec}",
    "IJlig" => "\u{0132}",
    "ijlig" => "\u{0133}",
    "Imacr" => "\u{012a}",
    "imacr" => "\u{012b}",
    "image" => "\u{2111}",
    "imath" => "\u{0131}",
    "infin" => "\u{221e}",
    "inodot" => "\u{0131}",
    "int" => "\u{222b}",
    "Iogon" => "\u{012e}",
    "iogon" => "\u{012f}",
    "Iota" => "\u{0399}",
    "iota" => "\u{03b9}",
    "iquest" => "\u{00bf}",
    "isin" => "\u{2208}",
    "Itilde" => "\u{0128}",
    "itilde" => "\u{0129}",
    "Iuml" => "\u{00cf}",
    "iuml" => "\u{00ef}",
    "Jcirc" => "\u{0134}",
    "jcirc" => "\u{0135}",
    "Kappa" => "\u{039a}",
    "kappa" => "\u{03ba}",
    "Kcedil" => "\u{0136}",
    "kcedil" => "\u{0137}",
    "kgreen" => "\u{0138}",
    "Lacute" => "\u{0139}",
    "lacute" => "\u{013a}",
    "Lambda" => "\u{039b}",
    "lambda" => "\u{03bb}",
    "lang" => "\u{2329}",
    "laquo" => "\u{00ab}",
    "lArr" => "\u{21d0}",
    "larr" => "\u{2190}",
    "Lcaron" => "\u{013d}",
    "lcaron" => "\u{013e}",
    "Lcedil" => "\u{013b}",
    "lcedil" => "\u{013c}",
    "lceil" => "\u{2308}",
    "lcub" => "{",
    "ldquo" => "\u{201c}",
    "le" => "\u{2264}",
    "lfloor" => "\u{230a}",
    "Lmidot" => "\u{013f}",
    "lmidot" => "\u{0140}",
    "lowast" => "\u{2217}",
    "loz" => "\u{25ca}",
    "lpar" => "(",
    "lrm" => "\u{200e}",
    "lsaquo" => "\u{2039}",
    "lsqb" => "[",
    "lsquo" => "\u{2018}",
    "Lstrok" => "\u{0141}",
    "lstrok" => "\u{0142}",
    "lt" => "<",
    "macr" => "\u{00af}",
    "mdash" => "\u{2014}",
    "micro" => "\u{00b5}",
    "middot" => "\u{00b7}",
    "minus" => "\u{2212}",
    "Mu" => "\u{039c}",
    "mu" => "\u{03bc}",
    "nabla" => "\u{2207}",
    "Nacute" => "\u{0143}",
    "nacute" => "\u{0144}",
    "napos" => "\u{0149}",
    "nbsp" => "\u{00a0}",
    "Ncaron" => "\u{0147}",
    "ncaron" => "\u{0148}",
    "Ncedil" => "\u{0145}",
    "ncedil" => "\u{0146}",
    "ndash" => "\u{2013}",
    "ne" => "\u{2260}",
    "ni" => "\u{220b}",
    "not" => "\u{00ac}",
    "notin" => "\u{2209}",
    "nsub" => "\u{2284}",
    "Ntilde" => "\u{00d1}",
    "ntilde" => "\u{00f1}",
    "Nu" => "\u{039d}",
    "nu" => "\u{03bd}",
    "num" => "#",
    "Oacute" => "\u{00d3}",
    "oacute" => "\u{00f3}",
    "Ocirc" => "\u{00d4}",
    "ocirc" => "\u{00f4}",
    "Odblac" => "\u{0150}",
    "odblac" => "\u{0151}",
    "OElig" => "\u{0152}",
    "oelig" => "\u{0153}",
    "Ograve" => "\u{00d2}",
    "ograve" => "\u{00f2}",
    "oline" => "\u{203e}",
    "Omacr" => "\u{014c}",
    "omacr" => "\u{014d}",
    "Omega" => "\u{03a9}",
    "omega" => "\u{03c9}",
    "Omicron" => "\u{039f}",
    "omicron" => "\u{03bf}",
    "oplus" => "\u{2295}",
    "or" => "\u{2228}",
    "ordf" => "\u{00aa}",
    "ordm" => "\u{00ba}",
    "Oslash" => "\u{00d8}",
    "oslash" => "\u{00f8}",
    "Otilde" => "\u{00d5}",
    "otilde" => "\u{00f5}",
    "otimes" => "\u{2297}",
    "Ouml" => "\u{00d6}",
    "ouml" => "\u{00f6}",
    "para" => "\u{00b6}",
    "part" => "\u{2202}",
    "percnt" => "%",
    "permil" => "\u{2030}",
    "perp" => "\u{22a5}",
    "Phi" => "\u{03a6}",
    "phi" => "\u{03c6}",
    "Pi" => "\u{03a0}",
    "pi" => "\u{03c0}",
    "piv" => "\u{03d6}",
    "plusmn" => "\u{00b1}",
    "pound" => "\u{00a3}",
    "Prime" => "\u{2033}",
    "prime" => "\u{2032}",
    "prod" => "\u{220f}",
    "prop" => "\u{221d}",
    "Psi" => "\u{03a8}",
    "psi" => "\u{03c8}",
    "quot" => "\"",
    "Racute" => "\u{0154}",
    "racute" => "\u{0155}",
    "radic" => "\u{221a}",
    "rang" => "\u{232a}",
    "raquo" => "\u{00bb}",
    "rArr" => "\u{21d2}",
    "rarr" => "\u{2192}",
    "Rcaron" => "\u{0158}",
    "rcaron" => "\u{0159}",
    "Rcedil" => "\u{0156}",
    "rcedil" => "\u{0157}",
    "rceil" => "\u{2309}",
    "rcub" => "}",
    "rdquo" => "\u{201d}",
    "real" => "\u{211c}",
    "reg" => "\u{00ae}",
    "rfloor" => "\u{230b}",
    "Rho" => "\u{03a1}",
    "rho" => "\u{03c1}",
    "rlm" => "\u{200f}",
    "rpar" => ")",
    "rsaquo" => "\u{203a}",
    "rsqb" => "]",
    "rsquo" => "\u{2019}",
    "Sacute" => "\u{015a}",
    "sacute" => "\u{015b}",
    "sbquo" => "\u{201a}",
    "Scaron" => "\u{0160}",
    "scaron" => "\u{0161}",
    "Scedil" => "\u{015e}",
    "scedil" => "\u{015f}",
    "Scirc" => "\u{015c}",
    "scirc" => "\u{015d}",
    "sdot" => "\u{22c5}",
    "sect" => "\u{00a7}",
    "shy" => "\u{00ad}",
    "Sigma" => "\u{03a3}",
    "sigma" => "\u{03c3}",
    "sigmaf" => "\u{03c2}",
    "sim" => "\u{223c}",
    "Smacr" => "S\u{0304}",
    "smacr" => "s\u{0304}",
    "spades" => "\u{2660}",
    "sub" => "\u{2282}",
    "sube" => "\u{2286}",
    "sum" => "\u{2211}",
    "sup" => "\u{2283}",
    "sup1" => "\u{00b9}",
    "sup2" => "\u{00b2}",
    "sup3" => "\u{00b3}",
    "supe" => "\u{2287}",
    "szlig" => "\u{00df}",
    "Tau" => "\u{03a4}",
    "tau" => "\u{03c4}",
    "Tcaron" => "\u{0164}",
    "tcaron" => "\u{0165}",
    "Tcedil" => "\u{0162}",
    "tcedil" => "\u{0163}",
    "there4" => "\u{2234}",
    "Theta" => "\u{0398}",
    "theta" => "\u{03b8}",
    "thetasym" => "\u{03d1}",
    "thinsp" => "\u{2009}",
    "THORN" => "\u{00de}",
    "thorn" => "\u{00fe}",
    "tilde" => "\u{02dc}",
    "times" => "\u{00d7}",
    "trade" => "\u{2122}",
    "Tstrok" => "\u{0166}",
    "tstrok" => "\u{0167}",
    "Uacute" => "\u{00da}",
    "uacute" => "\u{00fa}",
    "uArr" => "\u{21d1}",
    "uarr" => "\u{2191}",
    "Ubreve" => "\u{016c}",
    "ubreve" => "\u{016d}",
    "Ucirc" => "\u{00db}",
    "ucirc" => "\u{00fb}",
    "Udblac" => "\u{0170}",
    "udblac" => "\u{0171}",
    "Ugrave" => "\u{00d9}",
    "ugrave" => "\u{00f9}",
    "Umacr" => "\u{016a}",
    "umacr" => "\u{016b}",
    "uml" => "\u{00a8}",
    "Uogon" => "\u{0172}",
    "uogon" => "\u{0173}",
    "upsih" => "\u{03d2}",
    "Upsilon" => "\u{03a5}",
    "upsilon" => "\u{03c5}",
    "Uring" => "\u{016e}",
    "uring" => "\u{016f}",
    "Utilde" => "\u{0168}",
    "utilde" => "\u{0169}",
    "Uuml" => "\u{00dc}",
    "uuml" => "\u{00fc}",
    "Wcirc" => "\u{0174}",
    "wcirc" => "\u{0175}",
    "weierp" => "\u{2118}",
    "Xi" => "\u{039e}",
    "xi" => "\u{03be}",
    "Yacute" => "\u{00dd}",
    "yacute" => "\u{00fd}",
    "Ycirc" => "\u{0176}",
    "ycirc" => "\u{0177}",
    "yen" => "\u{00a5}",
    "Yuml" => "\u{0178}",
    "yuml" => "\u{00ff}",
    "Zacute" => "\u{0179}",
    "zacute" => "\u{017a}",
    "Zcaron" => "\u{017d}",
    "zcaron" => "\u{017e}",
    "Zdot" => "\u{017b}",
    "zdot" => "\u{017c}",
    "Zeta" => "\u{0396}",
    "zeta" => "\u{03b6}",
    "zwj" => "\u{200d}",
    "zwnj" => "\u{200c}",
};

/// Decoded characters → canonical entity name.
pub static NAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "\"" => "quot",
    "#" => "num",
    "$" => "dollar",
    "%" => "percnt",
    "&" => "amp",
    "'" => "apos",
    "(" => "lpar",
    ")" => "rpar",
    "<" => "lt",
    ">" => "gt",
    "@" => "commat",
    "S\u{0304}" => "Smacr",
    "[" => "lsqb",
    "\\" => "bsol",
    "]" => "rsqb",
    "h\u{0301}" => "hacute",
    "s\u{0304}" => "smacr",
    "{" => "lcub",
    "}" => "rcub",
    "\u{00a0}" => "nbsp",
    "\u{00a1}" => "iexcl",
    "\u{00a2}" => "cent",
    "\u{00a3}" => "pound",
    "\u{00a4}" => "curren",
    "\u{00a5}" => "yen",
    "\u{00a6}" => "brvbar",
    "\u{00a7}" => "sect",
    "\u{00a8}" => "uml",
    "\u{00a9}" => "copy",
    "\u{00aa}" => "ordf",
    "\u{00ab}" => "laquo",
    "\u{00ac}" => "not",
    "\u{00ad}" => "shy",
    "\u{00ae}" => "reg",
    "\u{00af}" => "macr",
    "\u{00b0}" => "deg",
    "\u{00b1}" => "plusmn",
    "\u{00b2}" => "sup2",
    "\u{00b3}" => "sup3",
    "\u{00b4}" => "acute",
    "\u{00b5}" => "micro",
    "\u{00b6}" => "para",
    "\u{00b7}" => "middot",
    "\u{00b8}" => "cedil",
    "\u{00b9}" => "sup1",
    "\u{00ba}" => "ordm",
    "\u{00bb}" => "raquo",
    "\u{00bc}" => "frac14",
    "\u{00bd}" => "frac12",
    "\u{00be}" => "frac34",
    "\u{00bf}" => "iquest",
    "\u{00c0}" => "Agrave",
    "\u{00c1}" => "Aacute",
    "\u{00c2}" => "Acirc",
    "\u{00c3}" => "Atilde",
    "\u{00c4}" => "Auml",
    "\u{00c5}" => "Aring",
    "\u{00c6}" => "AElig",
    "\u{00c7}" => "Ccedil",
    "\u{00c8}" => "Egrave",
    "\u{00c9}" => "Eacute",
    "\u{00ca}" => "Ecirc",
    "\u{00cb}" => "Euml",
    "\u{00cc}" => "Igrave",
    "\u{00cd}" => "Iacute",
    "\u{00ce}" => "Icirc",
    "\u{00cf}" => "Iuml",
    "\u{00d0}" => "ETH",
    "\u{00d1}" => "Ntilde",
    "\u{00d2}" => "Ograve",
    "\u{00d3}" => "Oacute",
    "\u{00d4}" => "Ocirc",
    "\u{00d5}" => "Otilde",
    "\u{00d6}" => "Ouml",
    "\u{00d7}" => "times",
    "\u{00d8}" => "Oslash",
    "\u{00d9}" => "Ugrave",
    "\u{00da}" => "Uacute",
    "\u{00db}" => "Ucirc",
    "\u{00dc}" => "Uuml",
    "\u{00dd}" => "Yacute",
    "\u{00de}" => "THORN",
    "\u{00df}" => "szlig",
    "\u{00e0}" => "agrave",
    "\u{00e1}" => "aacute",
    "\u{00e2}" => "acirc",
    "\u{00e3}" => "atilde",
    "\u{00e4}" => "auml",
    "\u{00e5}" => "aring",
    "\u{00e6}" => "aelig",
    "\u{00e7}" => "ccedil",
    "\u{00e8}" => "egrave",
    "\u{00e9}" => "eacute",
    "\u{00ea}" => "ecirc",
    "\u{00eb}" => "euml",
    "\u{00ec}" => "igrave",
    "\u{00ed}" => "iacute",
    "\u{00ee}" => "icirc",
    "\u{00ef}" => "iuml",
    "\u{00f0}" => "eth",
    "\u{00f1}" => "ntilde",
    "\u{00f2}" => "ograve",
    "\u{00f3}" => "oacute",
    "\u{00f4}" => "ocirc",
    "\u{00f5}" => "otilde",
    "\u{00f6}" => "ouml",
    "\u{00f7}" => "divide",
    "\u{00f8}" => "oslash",
    "\u{00f9}" => "ugrave",
    "\u{00fa}" => "uacute",
    "\u{00fb}" => "ucirc",
    "\u{00fc}" => "uuml",
    "\u{00fd}" => "yacute",
    "\u{00fe}" => "thorn",
    "\u{00ff}" => "yuml",
    "\u{0100}" => "Amacr",
    "\u{0101}" => "amacr",
    "\u{0102}" => "Abreve",
    "\u{0103}" => "abreve",
    "\u{0104}" => "Aogon",
    "\u{0105}" => "aogon",
    "\u{0106}" => "Cacute",
    "\u{0107}" => "cacute",
    "\u{0108}" => "Ccirc",
    "\u{0109}" => "ccirc",
    "\u{010a}" => "Cdot",
    "\u{010b}" => "cdot",
    "\u{010c}" => "Ccaron",
    "\u{010d}" => "ccaron",
    "\u{010e}" => "Dcaron",
    "\u{010f}" => "dcaron",
    "\u{0110}" => "Dstrok",
    "\u{0111}" => "dstrok",
    "\u{0112}" => "Emacr",
    "\u{0113}" => "emacr",
    "\u{0116}" => "Edot",
    "\u{0117}" => "edot",
    "\u{0118}" => "Eogon",
    "\u{0119}" => "eogon",
    "\u{011a}" => "Ecaron",
    "\u{011b}" => "ecaron",
    "\u{011c}" => "Gcirc",
    "\u{011d}" => "gcirc",
    "\u{011e}" => "Gbreve",
    "\u{011f}" => "gbreve",
    "\u{0120}" => "Gdot",
    "\u{0121}" => "gdot",
    "\u{0122}" => "Gcedil",
    "\u{0124}" => "Hcirc",
    "\u{0125}" => "hcirc",
    "\u{0126}" => "Hstrok",
    "\u{0127}" => "hstrok",
    "\u{0128}" => "Itilde",
    "\u{0129}" => "itilde",
    "\u{012a}" => "Imacr",
    "\u{012b}" => "imacr",
    "\u{012e}" => "Iogon",
    "\u{012f}" => "iogon",
    "\u{0130}" => "Idot",
    "\u{0131}" => "imath",
    "\u{0132}" => "IJlig",
    "\u{0133}" => "ijlig",
    "\u{0134}" => "Jcirc",
    "\u{0135}" => "jcirc",
    "\u{0136}" => "Kcedil",
    "\u{0137}" => "kcedil",
    "\u{0138}" => "kgreen",
    "\u{0139}" => "Lacute",
    "\u{013a}" => "lacute",
    "\u{013b}" => "Lcedil",
    "\u{013c}" => "lcedil",
    "\u{013d}" => "Lcaron",
    "\u{013e}" => "lcaron",
    "\u{013f}" => "Lmidot",
    "\u{0140}" => "lmidot",
    "\u{0141}" => "Lstrok",
    "\u{0142}" => "lstrok",
    "\u{0143}" => "Nacute",
    "\u{0144}" => "nacute",
    "\u{0145}" => "Ncedil",
    "\u{0146}" => "ncedil",
    "\u{0147}" => "Ncaron",
    "\u{0148}" => "ncaron",
    "\u{0149}" => "napos",
    "\u{014a}" => "ENG",
    "\u{014b}" => "eng",
    "\u{014c}" => "Omacr",
    "\u{014d}" => "omacr",
    "\u{0150}" => "Odblac",
    "\u{0151}" => "odblac",
    "\u{0152}" => "OElig",
    "\u{0153}" => "oelig",
    "\u{0154}" => "Racute",
    "\u{0155}" => "racute",
    "\u{0156}" => "Rcedil",
    "\u{0157}" => "rcedil",
    "\u{0158}" => "Rcaron",
    "\u{0159}" => "rcaron",
    "\u{015a}" => "Sacute",
    "\u{015b}" => "sacute",
    "\u{015c}" => "Scirc",
    "\u{015d}" => "scirc",
    "\u{015e}" => "Scedil",
    "\u{015f}" => "scedil",
    "\u{0160}" => "Scaron",
    "\u{0161}" => "scaron",
    "\u{0162}" => "Tcedil",
    "\u{0163}" => "tcedil",
    "\u{0164}" => "Tcaron",
    "\u{0165}" => "tcaron",
    "\u{0166}" => "Tstrok",
    "\u{0167}" => "tstrok",
    "\u{0168}" => "Utilde",
    "\u{0169}" => "utilde",
    "\u{016a}" => "Umacr",
    "\u{016b}" => "umacr",
    "\u{016c}" => "Ubreve",
    "\u{016d}" => "ubreve",
    "\u{016e}" => "Uring",
    "\u{016f}" => "uring",
    "\u{0170}" => "Udblac",
    "\u{0171}" => "udblac",
    "\u{0172}" => "Uogon",
    "\u{0173}" => "uogon",
    "\u{0174}" => "Wcirc",
    "\u{0175}" => "wcirc",
    "\u{0176}" => "Ycirc",
    "\u{0177}" => "ycirc",
    "\u{0178}" => "Yuml",
    "\u{0179}" => "Zacute",
    "\u{017a}" => "zacute",
    "\u{017b}" => "Zdot",
    "\u{017c}" => "zdot",
    "\u{017d}" => "Zcaron",
    "\u{017e}" => "zcaron",
    "\u{0192}" => "fnof",
    "\u{02c6}" => "circ",
    "\u{02dc}" => "tilde",
    "\u{0391}" => "Alpha",
    "\u{0392}" => "Beta",
    "\u{0393}" => "Gamma",
    "\u{0394}" => "Delta",
    "\u{0395}" => "Epsilon",
    "\u{0396}" => "Zeta",
    "\u{0397}" => "Eta",
    "\u{0398}" => "Theta",
    "\u{0399}" => "Iota",
    "\u{039a}" => "Kappa",
    "\u{039b}" => "Lambda",
    "\u{039c}" => "Mu",
    "\u{039d}" => "Nu",
    "\u{039e}" => "Xi",
    "\u{039f}" => "Omicron",
    "\u{03a0}" => "Pi",
    "\u{03a1}" => "Rho",
    "\u{03a3}" => "Sigma",
    "\u{03a4}" => "Tau",
    "\u{03a5}" => "Upsilon",
    "\u{03a6}" => "Phi",
    "\u{03a7}" => "Chi",
    "\u{03a8}" => "Psi",
    "\u{03a9}" => "Omega",
    "\u{03b1}" => "alpha",
    "\u{03b2}" => "beta",
    "\u{03b3}" => "gamma",
    "\u{03b4}" => "delta",
    "\u{03b5}" => "epsilon",
    "\u{03b6}" => "zeta",
    "\u{03b7}" => "eta",
    "\u{03b8}" => "theta",
    "\u{03b9}" => "iota",
    "\u{03ba}" => "kappa",
    "\u{03bb}" => "lambda",
    "\u{03bc}" => "mu",
    "\u{03bd}" => "nu",
    "\u{03be}" => "xi",
    "\u{03bf}" => "omicron",
    "\u{03c0}" => "pi",
    "\u{03c1}" => "rho",
    "\u{03c2}" => "sigmaf",
    "\u{03c3}" => "sigma",
    "\u{03c4}" => "tau",
    "\u{03c5}" => "upsilon",
    "\u{03c6}" => "phi",
    "\u{03c7}" => "chi",
    "\u{03c8}" => "psi",
    "\u{03c9}" => "omega",
    "\u{03d1}" => "thetasym",
    "\u{03d2}" => "upsih",
    "\u{03d6}" => "piv",
    "\u{2002}" => "ensp",
    "\u{2003}" => "emsp",
    "\u{2009}" => "thinsp",
    "\u{200c}" => "zwnj",
    "\u{200d}" => "zwj",
    "\u{200e}" => "lrm",
    "\u{200f}" => "rlm",
    "\u{2013}" => "ndash",
    "\u{2014}" => "mdash",
    "\u{2018}" => "lsquo",
    "\u{2019}" => "rsquo",
    "\u{201a}" => "sbquo",
    "\u{201c}" => "ldquo",
    "\u{201d}" => "rdquo",
    "\u{201e}" => "bdquo",
    "\u{2020}" => "dagger",
    "\u{2021}" => "Dagger",
    "\u{2022}" => "bull",
    "\u{2026}" => "hellip",
    "\u{2030}" => "permil",
    "\u{2032}" => "prime",
    "\u{2033}" => "Prime",
    "\u{2039}" => "lsaquo",
    "\u{203a}" => "rsaquo",
    "\u{203e}" => "oline",
    "\u{2044}" => "frasl",
    "\u{20ac}" => "euro",
    "\u{2111}" => "image",
    "\u{2118}" => "weierp",
    "\u{211c}" => "real",
    "\u{2122}" => "trade",
    "\u{2135}" => "alefsym",
    "\u{2190}" => "larr",
    "\u{2191}" => "uarr",
    "\u{2192}" => "rarr",
    "\u{2193}" => "darr",
    "\u{2194}" => "harr",
    "\u{21b5}" => "crarr",
    "\u{21d0}" => "lArr",
    "\u{21d1}" => "uArr",
    "\u{21d2}" => "rArr",
    "\u{21d3}" => "dArr",
    "\u{21d4}" => "hArr",
    "\u{2200}" => "forall",
    "\u{2202}" => "part",
    "\u{2203}" => "exist",
    "\u{2205}" => "empty",
    "\u{2207}" => "nabla",
    "\u{2208}" => "isin",
    "\u{2209}" => "notin",
    "\u{220b}" => "ni",
    "\u{220f}" => "prod",
    "\u{2211}" => "sum",
    "\u{2212}" => "minus",
    "\u{2217}" => "lowast",
    "\u{221a}" => "radic",
    "\u{221d}" => "prop",
    "\u{221e}" => "infin",
    "\u{2220}" => "ang",
    "\u{2227}" => "and",
    "\u{2228}" => "or",
    "\u{2229}" => "cap",
    "\u{222a}" => "cup",
    "\u{222b}" => "int",
    "\u{2234}" => "there4",
    "\u{223c}" => "sim",
    "\u{2245}" => "cong",
    "\u{2248}" => "asymp",
    "\u{2260}" => "ne",
    "\u{2261}" => "equiv",
    "\u{2264}" => "le",
    "\u{2265}" => "ge",
    "\u{2282}" => "sub",
    "\u{2283}" => "sup",
    "\u{2284}" => "nsub",
    "\u{2286}" => "sube",
    "\u{2287}" => "supe",
    "\u{2295}" => "oplus",
    "\u{2297}" => "otimes",
    "\u{22a5}" => "perp",
    "\u{22c5}" => "sdot",
    "\u{2308}" => "lceil",
    "\u{2309}" => "rceil",
    "\u{230a}" => "lfloor",
    "\u{230b}" => "rfloor",
    "\u{2329}" => "lang",
    "\u{232a}" => "rang",
    "\u{25ca}" => "loz",
    "\u{2660}" => "spades",
    "\u{2663}" => "clubs",
    "\u{2665}" => "hearts",
    "\u{2666}" => "diams",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_decoding_has_a_name() {
        for (name, decoded) in ENTITIES.entries() {
            let canonical = NAMES.get(decoded).copied();
            assert!(canonical.is_some(), "no canonical name for &{};", name);
            assert_eq!(ENTITIES.get(canonical.unwrap_or_default()), Some(decoded));
        }
    }

    #[test]
    fn test_lookups() {
        assert_eq!(ENTITIES.get("scaron"), Some(&"\u{0161}"));
        assert_eq!(ENTITIES.get("Zcaron"), Some(&"\u{017d}"));
        assert_eq!(ENTITIES.get("smacr"), Some(&"s\u{0304}"));
        assert_eq!(NAMES.get("\u{2030}"), Some(&"permil"));
        assert_eq!(NAMES.get("&"), Some(&"amp"));
        assert!(ENTITIES.get("unknown").is_none());
    }
}
