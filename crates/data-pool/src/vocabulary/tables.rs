//! Built-in word lists. Cyrillic-script locales use Latin transliterations.

use super::NameTable;
use crate::models::Locale;

pub(super) fn names(locale: Locale) -> NameTable {
    match locale {
        Locale::EnUs => NameTable {
            male: EN_US_MALE,
            female: EN_US_FEMALE,
            family: EN_US_FAMILY,
        },
        Locale::EnGb => NameTable {
            male: EN_GB_MALE,
            female: EN_GB_FEMALE,
            family: EN_GB_FAMILY,
        },
        Locale::DeDe => NameTable {
            male: DE_MALE,
            female: DE_FEMALE,
            family: DE_FAMILY,
        },
        Locale::FrFr => NameTable {
            male: FR_MALE,
            female: FR_FEMALE,
            family: FR_FAMILY,
        },
        Locale::EsEs => NameTable {
            male: ES_MALE,
            female: ES_FEMALE,
            family: ES_FAMILY,
        },
        Locale::ItIt => NameTable {
            male: IT_MALE,
            female: IT_FEMALE,
            family: IT_FAMILY,
        },
        Locale::PlPl => NameTable {
            male: PL_MALE,
            female: PL_FEMALE,
            family: PL_FAMILY,
        },
        Locale::UkUa => NameTable {
            male: UK_MALE,
            female: UK_FEMALE,
            family: UK_FAMILY,
        },
        Locale::RuRu => NameTable {
            male: RU_MALE,
            female: RU_FEMALE,
            family: RU_FAMILY,
        },
        Locale::CsCz => NameTable {
            male: CS_MALE,
            female: CS_FEMALE,
            family: CS_FAMILY,
        },
        Locale::SvSe => NameTable {
            male: SV_MALE,
            female: SV_FEMALE,
            family: SV_FAMILY,
        },
        Locale::NoNo => NameTable {
            male: NO_MALE,
            female: NO_FEMALE,
            family: NO_FAMILY,
        },
        Locale::DaDk => NameTable {
            male: DA_MALE,
            female: DA_FEMALE,
            family: DA_FAMILY,
        },
        Locale::FiFi => NameTable {
            male: FI_MALE,
            female: FI_FEMALE,
            family: FI_FAMILY,
        },
    }
}

pub(super) fn cities(locale: Locale) -> &'static [&'static str] {
    match locale {
        Locale::EnUs => EN_US_CITIES,
        Locale::EnGb => EN_GB_CITIES,
        Locale::DeDe => DE_CITIES,
        Locale::FrFr => FR_CITIES,
        Locale::EsEs => ES_CITIES,
        Locale::ItIt => IT_CITIES,
        Locale::PlPl => PL_CITIES,
        Locale::UkUa => UK_CITIES,
        Locale::RuRu => RU_CITIES,
        Locale::CsCz => CS_CITIES,
        Locale::SvSe => SV_CITIES,
        Locale::NoNo => NO_CITIES,
        Locale::DaDk => DA_CITIES,
        Locale::FiFi => FI_CITIES,
    }
}

pub(super) const PET_NAMES: &[&str] = &[
    "Bailey", "Bandit", "Bear", "Bella", "Biscuit", "Blue", "Boomer", "Bruno", "Buddy", "Buster",
    "Charlie", "Chester", "Chloe", "Cleo", "Coco", "Cookie", "Cooper", "Daisy", "Duke", "Felix",
    "Fluffy", "Ginger", "Gizmo", "Gracie", "Harley", "Honey", "Jack", "Jasper", "Kiki", "Leo",
    "Lily", "Loki", "Lucky", "Lucy", "Luna", "Maggie", "Max", "Milo", "Misty", "Molly", "Nala",
    "Oliver", "Oreo", "Oscar", "Patch", "Peanut", "Pepper", "Princess", "Pumpkin", "Rex", "Riley",
    "Rocky", "Rosie", "Ruby", "Rusty", "Sadie", "Sam", "Shadow", "Simba", "Smokey", "Snowball",
    "Sophie", "Spike", "Sunny", "Teddy", "Tiger", "Toby", "Trixie", "Whiskers", "Winston", "Zeus",
    "Ziggy", "Abby", "Ace", "Apollo", "Archie", "Athena", "Baxter", "Benji", "Blaze", "Bolt",
    "Bonnie", "Boots", "Bubbles", "Buttons", "Caramel", "Casper", "Cinnamon", "Clover", "Cocoa",
    "Comet", "Dexter", "Diesel", "Dolly", "Domino", "Dotty", "Ellie", "Fido", "Finn", "Flash",
    "Frankie", "Fudge", "Goldie", "Gus", "Hazel", "Hunter", "Indy", "Izzy", "Jake", "Jazz", "Juno",
    "Kira", "Koda", "Lady", "Lola", "Louie", "Lulu", "Mango", "Marley", "Maple", "Mickey", "Minnie",
    "Mocha", "Muffin", "Murphy", "Nemo", "Nugget", "Olive", "Ozzy", "Panda", "Penny", "Pickles",
    "Pippin", "Polly", "Poppy", "Pretzel", "Quincy", "Raven", "Rocco", "Romeo", "Roxy", "Rufus",
    "Sasha", "Scout", "Skippy", "Smudge", "Snickers", "Socks", "Sparky", "Stella", "Sugar", "Sushi",
    "Tango", "Thor", "Tilly", "Tinkerbell", "Titan", "Tucker", "Waffles", "Willow", "Yoda", "Zara",
    "Zoe", "Biscotti", "Bamboo", "Cricket", "Dusty", "Echo", "Fern", "Harvey", "Iggy", "Jellybean",
    "Kitty", "Lemon", "Mittens", "Noodle", "Otis", "Pebbles", "Pip", "Rascal", "Sable", "Tofu",
    "Truffle", "Velvet", "Wally", "Xena",
];

const EN_US_MALE: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
    "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Mark", "Steven", "Paul", "Andrew",
    "Joshua", "Kevin", "Brian", "Ryan", "Jacob", "Tyler", "Brandon", "Nathan", "Zachary", "Kyle",
    "Ethan", "Austin", "Jason", "Jeffrey", "Gary", "Timothy", "Jose", "Larry", "Eric", "Stephen",
    "Scott", "Benjamin", "Gregory", "Frank", "Raymond", "Samuel", "Patrick", "Alexander", "Jack",
    "Dennis", "Jerry", "Aaron", "Henry", "Douglas", "Peter", "Adam", "Harold", "Carl", "Arthur",
    "Jonathan", "Justin", "Noah", "Logan", "Dylan", "Caleb", "Hunter", "Mason", "Owen", "Wyatt",
    "Luke", "Isaac", "Gavin",
];

const EN_US_FEMALE: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Barbara", "Elizabeth", "Susan", "Jessica", "Sarah",
    "Karen", "Nancy", "Lisa", "Ashley", "Kimberly", "Emily", "Michelle", "Amanda", "Melissa",
    "Stephanie", "Rebecca", "Laura", "Amber", "Brittany", "Megan", "Heather", "Samantha", "Madison",
    "Hailey", "Kayla", "Taylor", "Dorothy", "Sandra", "Donna", "Carol", "Ruth", "Sharon", "Deborah",
    "Cynthia", "Kathleen", "Angela", "Shirley", "Brenda", "Pamela", "Nicole", "Anna", "Emma",
    "Virginia", "Katherine", "Christine", "Debra", "Rachel", "Carolyn", "Janet", "Catherine",
    "Maria", "Olivia", "Abigail", "Chloe", "Brianna", "Lauren", "Alexis", "Avery", "Courtney",
    "Destiny", "Jasmine", "Morgan", "Sydney", "Victoria", "Haley", "Paige",
];

const EN_US_FAMILY: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Wilson", "Anderson", "Taylor", "Thomas", "Moore", "Jackson", "Martin", "Lee",
    "Thompson", "White", "Harris", "Clark", "Lewis", "Robinson", "Walker", "Young", "Allen", "King",
    "Wright", "Scott", "Hill", "Green", "Adams", "Baker", "Nelson", "Carter", "Mitchell", "Roberts",
    "Turner", "Phillips", "Campbell", "Parker", "Evans", "Edwards", "Collins", "Stewart", "Sanchez",
    "Morris", "Rogers", "Reed", "Cook", "Morgan", "Bell", "Murphy", "Bailey", "Rivera", "Cooper",
    "Richardson", "Cox", "Howard", "Ward", "Torres", "Peterson", "Gray", "Ramirez", "James",
    "Watson", "Brooks", "Kelly", "Sanders", "Price", "Bennett", "Wood", "Barnes", "Ross",
    "Henderson", "Coleman", "Jenkins", "Perry", "Powell", "Long", "Patterson", "Hughes", "Flores",
    "Washington", "Butler", "Simmons", "Foster", "Gonzales", "Bryant", "Alexander", "Russell",
    "Griffin", "Diaz", "Hayes", "Myers", "Ford", "Hamilton", "Graham", "Sullivan", "Wallace",
    "Woods", "Cole", "West", "Jordan", "Owens", "Reynolds", "Fisher", "Ellis", "Harrison", "Gibson",
    "McDonald", "Cruz", "Marshall", "Ortiz", "Gomez", "Murray", "Freeman", "Wells", "Webb",
    "Simpson", "Stevens", "Tucker", "Porter", "Hunter", "Hicks", "Crawford", "Henry", "Boyd",
    "Mason", "Morales", "Kennedy", "Warren", "Dixon",
];

const EN_US_CITIES: &[&str] = &[
    "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia", "San Antonio",
    "San Diego", "Dallas", "Austin", "Jacksonville", "Columbus", "Charlotte", "Indianapolis",
    "Seattle", "Denver", "Boston", "Nashville", "Portland", "Las Vegas", "Detroit", "Memphis",
    "Louisville", "Baltimore", "Milwaukee", "Albuquerque", "Tucson", "Sacramento", "Atlanta",
    "Omaha", "Raleigh", "Miami", "Minneapolis", "Tulsa", "Cleveland", "Pittsburgh", "Cincinnati",
    "Boulder", "Reno", "Savannah", "Fort Worth", "San Jose", "San Francisco", "El Paso",
    "Washington", "Oklahoma City", "Fresno", "Mesa", "Kansas City", "Colorado Springs",
    "Long Beach", "Virginia Beach", "Oakland", "Tampa", "Arlington", "New Orleans", "Wichita",
    "Bakersfield", "Aurora", "Anaheim", "Honolulu", "Santa Ana", "Riverside", "Corpus Christi",
    "Lexington", "Henderson", "Stockton", "Saint Paul", "St. Louis", "Anchorage", "Newark", "Plano",
    "Lincoln", "Orlando", "Irvine", "Toledo", "Jersey City", "Chula Vista", "Durham", "Fort Wayne",
    "St. Petersburg", "Laredo", "Buffalo", "Madison", "Lubbock", "Chandler", "Scottsdale",
    "Glendale", "Norfolk", "Winston-Salem", "Gilbert", "Chesapeake", "Irving", "Garland", "Hialeah",
    "Boise", "Spokane", "Baton Rouge", "Richmond", "Des Moines", "Tacoma", "San Bernardino",
    "Modesto", "Fontana", "Birmingham", "Rochester", "Fayetteville", "Moreno Valley", "Oxnard",
    "Fremont", "Huntington Beach", "Montgomery", "Yonkers", "Salt Lake City", "Grand Rapids",
    "Amarillo", "Little Rock", "Akron", "Augusta", "Huntsville", "Columbia", "Knoxville",
    "Providence", "Chattanooga", "Tallahassee", "Worcester", "Springfield", "Hartford", "Syracuse",
    "Dayton", "Ann Arbor", "Eugene", "Salem", "Provo", "Billings", "Fargo", "Sioux Falls",
    "Charleston", "Burlington", "Manchester", "Wilmington", "Santa Fe", "Flagstaff", "Pasadena",
    "Berkeley", "Santa Barbara", "Palo Alto", "Boulder City", "Asheville", "Greenville", "Macon",
    "Pensacola", "Gainesville", "Sarasota", "Naples", "Key West", "Cheyenne", "Missoula", "Bozeman",
    "Juneau", "Fairbanks",
];

const EN_GB_MALE: &[&str] = &[
    "Oliver", "George", "Harry", "Jack", "Jacob", "Charlie", "Thomas", "Oscar", "William", "James",
    "Alfie", "Henry", "Leo", "Joshua", "Freddie", "Archie", "Ethan", "Isaac", "Alexander", "Edward",
    "Samuel", "Joseph", "Daniel", "Max", "Lewis", "Callum", "Rhys", "Liam", "Noah", "Jayden",
    "Ryan", "Luke", "Adam", "Benjamin", "Sebastian", "Theo", "Arthur", "Elliot", "Finley", "Toby",
    "Dylan", "Jake", "Owen", "Connor", "Kieran", "Ciaran", "Euan", "Angus", "Hamish", "Fraser",
    "Rory", "Gareth", "Dafydd", "Iwan", "Gethin", "Rupert", "Hugo", "Nathan",
];

const EN_GB_FEMALE: &[&str] = &[
    "Olivia", "Amelia", "Isla", "Ava", "Emily", "Isabella", "Mia", "Poppy", "Ella", "Lily",
    "Sophie", "Grace", "Evie", "Charlotte", "Jessica", "Freya", "Ruby", "Chloe", "Daisy", "Phoebe",
    "Holly", "Imogen", "Eleanor", "Harriet", "Rosie", "Megan", "Bethany", "Niamh", "Florence",
    "Matilda", "Evelyn", "Willow", "Ivy", "Sienna", "Harper", "Elsie", "Scarlett", "Millie", "Lucy",
    "Ellie", "Alice", "Isabelle", "Hannah", "Katie", "Lauren", "Abigail", "Zara", "Maisie",
    "Eilidh", "Catriona", "Morag", "Cerys", "Seren", "Ffion", "Siobhan", "Aoife", "Beatrice",
    "Victoria",
];

const EN_GB_FAMILY: &[&str] = &[
    "Smith", "Jones", "Williams", "Taylor", "Brown", "Davies", "Evans", "Wilson", "Thomas",
    "Johnson", "Roberts", "Robinson", "Thompson", "Wright", "Walker", "White", "Edwards", "Hughes",
    "Green", "Hall", "Lewis", "Harris", "Clarke", "Patel", "Jackson", "Wood", "Turner", "Martin",
    "Cooper", "Hill", "Ward", "Morris", "Moore", "Clark", "Lee", "King", "Baker", "Harrison",
    "Allen", "Young", "Mitchell", "Watson", "Anderson", "Scott", "Phillips", "Davis", "Campbell",
    "Parker", "Bennett", "Shaw", "Cook", "Bailey", "Richardson", "Carter", "Collins", "Stewart",
    "Murphy", "Mills", "Morgan", "Bell", "Marshall", "Griffiths", "Graham", "Kelly", "Simpson",
    "Ellis", "Murray", "Chapman", "Dixon", "Gray", "Mason", "Russell", "Webb", "Hunt", "Holmes",
    "Palmer", "Rogers", "Fox", "Jenkins", "Knight", "Butler", "Barnes", "Owen", "Lloyd", "Pearson",
    "Stevens", "Harvey", "Reid", "Price", "Powell", "Fisher", "Fletcher", "Matthews", "Ross",
    "Hunter", "Grant", "Kennedy", "Ali", "Khan", "Hussain", "Singh", "Rees", "Pritchard",
    "MacDonald", "Macleod", "Fraser", "Sutherland", "Cameron", "McKenzie", "Wallace", "Brennan",
    "Quinn", "Doherty",
];

const EN_GB_CITIES: &[&str] = &[
    "London", "Birmingham", "Manchester", "Leeds", "Liverpool", "Sheffield", "Bristol",
    "Newcastle upon Tyne", "Nottingham", "Leicester", "Coventry", "Bradford", "Southampton",
    "Portsmouth", "Plymouth", "Reading", "Derby", "Norwich", "Oxford", "Cambridge", "York",
    "Brighton", "Exeter", "Bath", "Canterbury", "Chester", "Durham", "Lancaster", "Edinburgh",
    "Glasgow", "Aberdeen", "Dundee", "Cardiff", "Swansea", "Belfast", "Wolverhampton",
    "Stoke-on-Trent", "Sunderland", "Hull", "Preston", "Salford", "Milton Keynes", "Northampton",
    "Luton", "Bournemouth", "Middlesbrough", "Blackpool", "Bolton", "Peterborough", "Swindon",
    "Huddersfield", "Ipswich", "Poole", "Oldham", "Blackburn", "Gloucester", "Cheltenham",
    "Worcester", "Hereford", "Lincoln", "Carlisle", "Wakefield", "Salisbury", "Winchester",
    "Chichester", "Colchester", "Chelmsford", "St Albans", "Guildford", "Maidstone", "Hastings",
    "Eastbourne", "Torquay", "Truro", "Penzance", "Shrewsbury", "Stafford", "Lichfield", "Warwick",
    "Stratford-upon-Avon", "Harrogate", "Scarborough", "Whitby", "Kendal", "Ripon", "Wells", "Ely",
    "Dover", "Folkestone", "Margate", "Southend-on-Sea", "Slough", "Watford", "Crawley",
    "Basingstoke", "Taunton", "Yeovil", "Barnstaple", "Inverness", "Stirling", "Perth", "Paisley",
    "Ayr", "Dumfries", "Fort William", "Oban", "St Andrews", "Newport", "Wrexham", "Bangor",
    "Aberystwyth", "Carmarthen", "Llandudno", "Londonderry", "Lisburn", "Newry", "Armagh",
    "Enniskillen", "Ballymena",
];

const DE_MALE: &[&str] = &[
    "Lukas", "Leon", "Finn", "Jonas", "Paul", "Felix", "Maximilian", "Elias", "Ben", "Noah", "Tim",
    "Jan", "Niklas", "Moritz", "Julian", "Philipp", "Tobias", "Florian", "Sebastian", "Stefan",
    "Andreas", "Thomas", "Michael", "Jürgen", "Uwe", "Klaus", "Matthias", "Markus", "Lars", "Kai",
    "Sven", "Jens", "Dirk", "Frank", "Holger", "Rainer", "Wolfgang", "Dieter", "Günter", "Horst",
    "Manfred", "Helmut", "Werner", "Karl", "Heinz", "Peter", "Alexander", "Christian", "Daniel",
    "David", "Simon", "Jakob", "Emil", "Anton", "Theo", "Henry", "Oskar", "Mats", "Erik", "Fabian",
    "Dominik", "Benedikt",
];

const DE_FEMALE: &[&str] = &[
    "Mia", "Emma", "Hannah", "Sofia", "Lea", "Lena", "Anna", "Marie", "Laura", "Leonie", "Lina",
    "Johanna", "Clara", "Katharina", "Julia", "Sabine", "Petra", "Ursula", "Monika", "Claudia",
    "Stefanie", "Nicole", "Sandra", "Birgit", "Jana", "Franziska", "Greta", "Ida", "Charlotte",
    "Emilia", "Amelie", "Frieda", "Mila", "Ella", "Luisa", "Paula", "Helene", "Mathilda", "Marlene",
    "Anja", "Silke", "Heike", "Karin", "Renate", "Ingrid", "Gisela", "Helga", "Brigitte", "Elke",
    "Andrea", "Susanne", "Martina", "Christina", "Kerstin", "Tanja", "Melanie", "Vanessa", "Jasmin",
];

const DE_FAMILY: &[&str] = &[
    "Müller", "Schmidt", "Schneider", "Fischer", "Weber", "Meyer", "Wagner", "Becker", "Schulz",
    "Hoffmann", "Schäfer", "Koch", "Bauer", "Richter", "Klein", "Wolf", "Schröder", "Neumann",
    "Schwarz", "Zimmermann", "Braun", "Krüger", "Hofmann", "Hartmann", "Lange", "Schmitt", "Werner",
    "Schmitz", "Krause", "Meier", "Lehmann", "Schmid", "Schulze", "Maier", "Köhler", "Herrmann",
    "König", "Walter", "Mayer", "Huber", "Kaiser", "Fuchs", "Peters", "Lang", "Scholz", "Möller",
    "Weiß", "Jung", "Hahn", "Schubert", "Vogel", "Friedrich", "Keller", "Günther", "Frank",
    "Berger", "Winkler", "Roth", "Beck", "Lorenz", "Baumann", "Franke", "Albrecht", "Schuster",
    "Simon", "Ludwig", "Böhm", "Winter", "Kraus", "Martin", "Schumacher", "Krämer", "Vogt", "Stein",
    "Jäger", "Otto", "Sommer", "Groß", "Seidel", "Heinrich", "Brandt", "Haas", "Schreiber", "Graf",
    "Schulte", "Dietrich", "Ziegler", "Kuhn", "Kühn", "Pohl", "Engel", "Horn", "Busch", "Bergmann",
    "Thomas", "Voigt", "Sauer", "Arnold", "Wolff", "Pfeiffer",
];

const DE_CITIES: &[&str] = &[
    "Berlin", "Hamburg", "München", "Köln", "Frankfurt am Main", "Stuttgart", "Düsseldorf",
    "Leipzig", "Dortmund", "Essen", "Bremen", "Dresden", "Hannover", "Nürnberg", "Duisburg",
    "Bochum", "Wuppertal", "Bielefeld", "Bonn", "Münster", "Mannheim", "Karlsruhe", "Augsburg",
    "Wiesbaden", "Freiburg im Breisgau", "Heidelberg", "Regensburg", "Rostock", "Kiel", "Erfurt",
    "Mainz", "Lübeck", "Gelsenkirchen", "Mönchengladbach", "Braunschweig", "Chemnitz", "Aachen",
    "Halle (Saale)", "Magdeburg", "Krefeld", "Oberhausen", "Hagen", "Hamm", "Saarbrücken",
    "Mülheim an der Ruhr", "Potsdam", "Ludwigshafen am Rhein", "Oldenburg", "Leverkusen",
    "Osnabrück", "Solingen", "Darmstadt", "Herne", "Neuss", "Paderborn", "Ingolstadt",
    "Offenbach am Main", "Fürth", "Würzburg", "Ulm", "Heilbronn", "Pforzheim", "Wolfsburg",
    "Göttingen", "Bottrop", "Reutlingen", "Koblenz", "Bremerhaven", "Recklinghausen",
    "Bergisch Gladbach", "Erlangen", "Jena", "Remscheid", "Trier", "Salzgitter", "Moers", "Siegen",
    "Hildesheim", "Gütersloh", "Kaiserslautern", "Cottbus", "Schwerin", "Witten", "Gera",
    "Iserlohn", "Zwickau", "Düren", "Esslingen am Neckar", "Ratingen", "Flensburg",
    "Villingen-Schwenningen", "Konstanz", "Worms", "Marburg", "Lüneburg", "Bayreuth", "Bamberg",
    "Passau", "Landshut", "Rosenheim", "Kempten", "Garmisch-Partenkirchen", "Weimar", "Wismar",
    "Stralsund", "Greifswald", "Görlitz", "Bautzen", "Meißen", "Quedlinburg", "Goslar", "Celle",
    "Husum",
];

const FR_MALE: &[&str] = &[
    "Jean", "Pierre", "Michel", "Philippe", "Alain", "Nicolas", "Christophe", "Laurent",
    "Sébastien", "Julien", "Antoine", "Thomas", "Lucas", "Hugo", "Louis", "Gabriel", "Arthur",
    "Mathis", "Théo", "Raphaël", "Maxime", "Guillaume", "Olivier", "François", "Étienne",
    "Baptiste", "Clément", "Romain", "Patrick", "Éric", "David", "Stéphane", "Frédéric", "Pascal",
    "Thierry", "Didier", "Bruno", "Gilles", "Jacques", "Bernard", "Daniel", "Henri", "Paul",
    "Victor", "Adam", "Nathan", "Léo", "Enzo", "Jules", "Ethan", "Tom", "Noah", "Timothée",
    "Valentin", "Alexandre", "Benoît", "Cédric", "Florian",
];

const FR_FEMALE: &[&str] = &[
    "Marie", "Nathalie", "Isabelle", "Sylvie", "Catherine", "Françoise", "Valérie", "Sandrine",
    "Céline", "Camille", "Léa", "Manon", "Chloé", "Emma", "Inès", "Jade", "Louise", "Alice",
    "Juliette", "Margaux", "Élodie", "Aurélie", "Claire", "Amélie", "Mathilde", "Pauline", "Océane",
    "Anaïs", "Christine", "Martine", "Monique", "Nicole", "Brigitte", "Véronique", "Stéphanie",
    "Julie", "Sophie", "Laure", "Hélène", "Émilie", "Charlotte", "Lucie", "Zoé", "Lola", "Rose",
    "Agathe", "Capucine", "Clémence", "Eloïse", "Gabrielle", "Lina", "Mila", "Victoire", "Apolline",
    "Bérénice", "Noémie", "Romane", "Coralie",
];

const FR_FAMILY: &[&str] = &[
    "Martin", "Bernard", "Dubois", "Thomas", "Robert", "Richard", "Petit", "Durand", "Leroy",
    "Moreau", "Simon", "Laurent", "Lefebvre", "Michel", "Garcia", "David", "Bertrand", "Roux",
    "Vincent", "Fournier", "Morel", "Girard", "André", "Lefèvre", "Mercier", "Dupont", "Lambert",
    "Bonnet", "François", "Martinez", "Legrand", "Garnier", "Faure", "Rousseau", "Blanc", "Guérin",
    "Muller", "Lefevre", "Fontaine", "Chevalier", "Robin", "Gauthier", "Perrin", "Morin", "Clément",
    "Nicolas", "Henry", "Roussel", "Mathieu", "Gautier", "Masson", "Marchand", "Duval", "Denis",
    "Dumont", "Marie", "Lemaire", "Noël", "Meyer", "Dufour", "Meunier", "Brun", "Blanchard",
    "Giraud", "Joly", "Rivière", "Lucas", "Brunet", "Gaillard", "Barbier", "Arnaud", "Gérard",
    "Roche", "Renard", "Schmitt", "Roy", "Leroux", "Colin", "Vidal", "Caron", "Picard", "Roger",
    "Fabre", "Aubert", "Lemoine", "Renaud", "Dumas", "Lacroix", "Olivier", "Philippe", "Bourgeois",
    "Pierre", "Benoît", "Rey", "Leclerc", "Payet", "Rolland", "Leclercq", "Guillaume", "Lecomte",
    "Lopez", "Jean", "Dupuy", "Guillot", "Hubert", "Berger", "Carpentier", "Sanchez", "Dupuis",
    "Moulin", "Louis", "Deschamps", "Huet", "Vasseur", "Perez", "Boucher", "Fleury", "Royer",
    "Klein", "Jacquet", "Adam", "Paris", "Poirier", "Marty", "Aubry", "Guyot", "Carré", "Charles",
    "Renault", "Charpentier", "Ménard", "Maillard", "Baron", "Bertin", "Bailly", "Hervé",
    "Schneider",
];

const FR_CITIES: &[&str] = &[
    "Paris", "Marseille", "Lyon", "Toulouse", "Nice", "Nantes", "Montpellier", "Strasbourg",
    "Bordeaux", "Lille", "Rennes", "Reims", "Saint-Étienne", "Toulon", "Le Havre", "Grenoble",
    "Dijon", "Angers", "Nîmes", "Villeurbanne", "Clermont-Ferrand", "Le Mans", "Aix-en-Provence",
    "Brest", "Tours", "Amiens", "Limoges", "Annecy", "Perpignan", "Metz", "Besançon", "Orléans",
    "Rouen", "Caen", "Avignon", "Boulogne-Billancourt", "Saint-Denis", "Argenteuil", "Montreuil",
    "Mulhouse", "Roubaix", "Tourcoing", "Nanterre", "Vitry-sur-Seine", "Créteil", "Poitiers", "Pau",
    "Calais", "La Rochelle", "Champigny-sur-Marne", "Antibes", "Cannes", "Colmar", "Saint-Nazaire",
    "Dunkerque", "Courbevoie", "Versailles", "Béziers", "Cherbourg-en-Cotentin",
    "Saint-Maur-des-Fossés", "Rueil-Malmaison", "Aubervilliers", "Quimper", "Valence", "Bourges",
    "Troyes", "Chambéry", "Niort", "Lorient", "Beauvais", "Vannes", "Cholet", "Laval", "Arles",
    "Saint-Malo", "Bayonne", "Biarritz", "Sète", "Narbonne", "Carcassonne", "Albi", "Montauban",
    "Agen", "Angoulême", "Périgueux", "Brive-la-Gaillarde", "Saint-Quentin", "Chartres", "Évreux",
    "Blois", "Châteauroux", "Nevers", "Auxerre", "Mâcon", "Chalon-sur-Saône", "Bourg-en-Bresse",
    "Belfort", "Charleville-Mézières", "Épinal", "Nancy", "Thionville", "Ajaccio", "Bastia", "Gap",
    "Menton", "Fréjus", "Hyères", "Alès", "Montélimar", "Vienne", "Lourdes", "Tarbes", "Rodez",
    "Aurillac", "Le Puy-en-Velay", "Vichy", "Moulins", "Saumur",
];

const ES_MALE: &[&str] = &[
    "Antonio", "José", "Manuel", "Francisco", "David", "Juan", "Javier", "Daniel", "Carlos",
    "Jesús", "Alejandro", "Miguel", "Rafael", "Pablo", "Sergio", "Fernando", "Jorge", "Luis",
    "Alberto", "Álvaro", "Diego", "Adrián", "Raúl", "Enrique", "Ramón", "Vicente", "Iván", "Rubén",
    "Marcos", "Óscar", "Andrés", "Ignacio", "Gonzalo", "Hugo", "Mario", "Martín", "Lucas", "Leo",
    "Mateo", "Nicolás", "Samuel", "Joaquín", "Emilio", "Santiago", "Tomás", "Rodrigo", "Jaime",
    "Víctor", "Guillermo", "Salvador", "Agustín", "Eduardo", "Gabriel", "Julián", "Aitor", "Iker",
    "Unai", "Xavier",
];

const ES_FEMALE: &[&str] = &[
    "María", "Carmen", "Ana", "Isabel", "Laura", "Cristina", "Marta", "Lucía", "Dolores", "Pilar",
    "Paula", "Elena", "Sara", "Raquel", "Rosa", "Manuela", "Mercedes", "Beatriz", "Nuria", "Silvia",
    "Julia", "Irene", "Patricia", "Rocío", "Alba", "Andrea", "Sofía", "Claudia", "Josefa",
    "Concepción", "Teresa", "Antonia", "Francisca", "Inmaculada", "Montserrat", "Rosario",
    "Encarnación", "Victoria", "Lorena", "Natalia", "Eva", "Noelia", "Verónica", "Ángela",
    "Daniela", "Martina", "Valeria", "Carla", "Lola", "Vega", "Olivia", "Jimena", "Aitana", "Nerea",
    "Ainhoa", "Itziar", "Begoña", "Amparo",
];

const ES_FAMILY: &[&str] = &[
    "García", "Rodríguez", "González", "Fernández", "López", "Martínez", "Sánchez", "Pérez",
    "Gómez", "Martín", "Jiménez", "Ruiz", "Hernández", "Díaz", "Moreno", "Muñoz", "Álvarez",
    "Romero", "Alonso", "Gutiérrez", "Navarro", "Torres", "Domínguez", "Vázquez", "Ramos", "Gil",
    "Ramírez", "Serrano", "Blanco", "Molina", "Morales", "Suárez", "Ortega", "Delgado", "Castro",
    "Ortiz", "Rubio", "Marín", "Sanz", "Núñez", "Iglesias", "Medina", "Garrido", "Cortés",
    "Castillo", "Santos", "Lozano", "Guerrero", "Cano", "Prieto", "Méndez", "Cruz", "Calvo",
    "Gallego", "Vidal", "León", "Márquez", "Herrera", "Peña", "Flores", "Cabrera", "Campos", "Vega",
    "Fuentes", "Carrasco", "Diez", "Caballero", "Reyes", "Nieto", "Aguilar", "Pascual", "Santana",
    "Herrero", "Lorenzo", "Montero", "Hidalgo", "Giménez", "Ibáñez", "Ferrer", "Durán", "Santiago",
    "Benítez", "Mora", "Vicente", "Vargas", "Arias", "Carmona", "Crespo", "Román", "Pastor", "Soto",
    "Sáez", "Velasco", "Moya", "Soler", "Parra", "Esteban", "Bravo", "Gallardo", "Rojas", "Pardo",
    "Merino", "Franco", "Espinosa", "Izquierdo", "Lara", "Rivas", "Silva", "Rivera", "Casado",
    "Arroyo", "Redondo", "Camacho", "Rey", "Vera", "Otero", "Luque", "Galán", "Montes", "Ríos",
    "Sierra", "Segura", "Carrillo", "Marcos", "Marti", "Soriano", "Mendoza",
];

const ES_CITIES: &[&str] = &[
    "Madrid", "Barcelona", "Valencia", "Sevilla", "Zaragoza", "Málaga", "Murcia", "Palma",
    "Las Palmas de Gran Canaria", "Bilbao", "Alicante", "Córdoba", "Valladolid", "Vigo", "Gijón",
    "Granada", "A Coruña", "Vitoria-Gasteiz", "Elche", "Oviedo", "Badalona", "Cartagena",
    "Pamplona", "Almería", "San Sebastián", "Santander", "Burgos", "Salamanca", "Albacete",
    "Logroño", "Cádiz", "Toledo", "L'Hospitalet de Llobregat", "Jerez de la Frontera", "Terrassa",
    "Sabadell", "Móstoles", "Santa Cruz de Tenerife", "Alcalá de Henares", "Fuenlabrada", "Leganés",
    "Getafe", "Huelva", "Castellón de la Plana", "Badajoz", "Tarragona", "Lleida", "Marbella",
    "León", "Dos Hermanas", "Mataró", "Torrejón de Ardoz", "Parla", "Algeciras", "Alcorcón", "Jaén",
    "Ourense", "Reus", "Telde", "Barakaldo", "Lugo", "Girona", "Santiago de Compostela", "Cáceres",
    "Lorca", "Coslada", "Talavera de la Reina", "El Puerto de Santa María", "Guadalajara",
    "Torrevieja", "Ponferrada", "Pontevedra", "Palencia", "Zamora", "Ávila", "Segovia", "Soria",
    "Cuenca", "Teruel", "Huesca", "Ciudad Real", "Mérida", "Ibiza", "Mahón", "Benidorm", "Gandia",
    "Alcoy", "Elda", "Orihuela", "Motril", "Linares", "Úbeda", "Baeza", "Ronda", "Antequera",
    "Écija", "Sanlúcar de Barrameda", "Arrecife", "Puerto del Rosario",
    "San Cristóbal de La Laguna", "Ferrol", "Avilés", "Torrelavega", "Irún", "Getxo", "Eibar",
    "Tudela", "Calahorra", "Manresa", "Vic", "Figueres", "Sitges", "Granollers",
];

const IT_MALE: &[&str] = &[
    "Giuseppe", "Giovanni", "Antonio", "Mario", "Luigi", "Francesco", "Angelo", "Vincenzo",
    "Pietro", "Salvatore", "Carlo", "Franco", "Domenico", "Bruno", "Paolo", "Michele", "Giorgio",
    "Aldo", "Sergio", "Luca", "Marco", "Andrea", "Alessandro", "Matteo", "Lorenzo", "Davide",
    "Simone", "Stefano", "Roberto", "Massimo", "Fabio", "Claudio", "Alberto", "Enrico", "Emanuele",
    "Federico", "Riccardo", "Gabriele", "Tommaso", "Leonardo", "Edoardo", "Filippo", "Nicola",
    "Daniele", "Cristian", "Diego", "Pasquale", "Raffaele", "Gianluca", "Fabrizio", "Maurizio",
    "Alessio", "Mattia", "Samuele", "Giacomo", "Ettore", "Dario",
];

const IT_FEMALE: &[&str] = &[
    "Maria", "Anna", "Giuseppina", "Rosa", "Angela", "Giovanna", "Teresa", "Lucia", "Carmela",
    "Caterina", "Francesca", "Anna Maria", "Antonietta", "Carla", "Elena", "Concetta", "Rita",
    "Margherita", "Giulia", "Sofia", "Aurora", "Alice", "Ginevra", "Chiara", "Martina", "Sara",
    "Valentina", "Federica", "Paola", "Laura", "Silvia", "Cristina", "Daniela", "Barbara", "Simona",
    "Roberta", "Monica", "Alessandra", "Elisa", "Ilaria", "Beatrice", "Emma", "Greta", "Matilde",
    "Camilla", "Arianna", "Noemi", "Bianca", "Gaia", "Viola", "Nicole", "Marta", "Serena",
    "Veronica", "Lorenza", "Ornella", "Luisa",
];

const IT_FAMILY: &[&str] = &[
    "Rossi", "Russo", "Ferrari", "Esposito", "Bianchi", "Romano", "Colombo", "Ricci", "Marino",
    "Greco", "Bruno", "Gallo", "Conti", "De Luca", "Mancini", "Costa", "Giordano", "Rizzo",
    "Lombardi", "Moretti", "Barbieri", "Fontana", "Santoro", "Mariani", "Rinaldi", "Caruso",
    "Ferrara", "Galli", "Martini", "Leone", "Longo", "Gentile", "Martinelli", "Vitale", "Lombardo",
    "Serra", "Villa", "Marini", "Ferri", "Fabbri", "Bellini", "Bianco", "Cattaneo", "Sala",
    "Pellegrini", "Palumbo", "Sanna", "Farina", "Rizzi", "Monti", "Morelli", "Amato", "Silvestri",
    "Mazza", "Testa", "Grassi", "Pellegrino", "Carbone", "Giuliani", "Benedetti", "Barone",
    "Rossetti", "Caputo", "Montanari", "Guerra", "Palmieri", "Bernardi", "Martino", "Fiore",
    "De Rosa", "Ferretti", "Bassi", "Messina", "Marchetti", "Donati", "Orlando", "Valentini",
    "Neri", "Piras", "Sartori", "Parisi", "D'Angelo", "Poli", "Mele", "Cirillo", "D'Amico",
    "Ruggiero", "Negri", "Marchi", "Bonetti", "Riva", "Vitali", "Coppola", "Santini", "Fumagalli",
    "Milani", "Gatti", "Cristiani", "De Santis", "Pagano", "Basile", "Zanetti", "Gentili", "Cocco",
    "Pace", "Bianchini", "Ruggeri", "Rota", "Lentini", "Tedesco",
];

const IT_CITIES: &[&str] = &[
    "Roma", "Milano", "Napoli", "Torino", "Palermo", "Genova", "Bologna", "Firenze", "Bari",
    "Catania", "Venezia", "Verona", "Messina", "Padova", "Trieste", "Brescia", "Parma", "Taranto",
    "Prato", "Modena", "Reggio Calabria", "Reggio Emilia", "Perugia", "Ravenna", "Livorno",
    "Cagliari", "Foggia", "Rimini", "Salerno", "Ferrara", "Sassari", "Bergamo", "Pisa", "Siena",
    "Latina", "Monza", "Giugliano in Campania", "Pescara", "Vicenza", "Terni", "Forlì", "Trento",
    "Novara", "Piacenza", "Ancona", "Andria", "Arezzo", "Udine", "Cesena", "Lecce", "Pesaro",
    "La Spezia", "Barletta", "Alessandria", "Pistoia", "Lucca", "Brindisi", "Catanzaro", "Treviso",
    "Como", "Busto Arsizio", "Marsala", "Grosseto", "Sesto San Giovanni", "Varese", "Pozzuoli",
    "Casoria", "Asti", "Cinisello Balsamo", "Caserta", "Gela", "Ragusa", "Pavia", "Cremona",
    "Carpi", "Quartu Sant'Elena", "Lamezia Terme", "Altamura", "Imola", "L'Aquila", "Massa",
    "Trapani", "Cosenza", "Potenza", "Viterbo", "Savona", "Matera", "Crotone", "Olbia", "Agrigento",
    "Siracusa", "Caltanissetta", "Enna", "Benevento", "Avellino", "Campobasso", "Isernia", "Aosta",
    "Bolzano", "Belluno", "Rovigo", "Mantova", "Lodi", "Sondrio", "Biella", "Cuneo", "Vercelli",
    "Imperia", "Sanremo", "Rieti", "Frosinone", "Chieti", "Teramo", "Macerata", "Urbino", "Assisi",
    "Orvieto", "Sorrento", "Amalfi", "Taormina", "Cefalù", "Chioggia", "Bassano del Grappa",
];

const PL_MALE: &[&str] = &[
    "Piotr", "Krzysztof", "Andrzej", "Tomasz", "Paweł", "Jan", "Michał", "Marcin", "Stanisław",
    "Jakub", "Adam", "Marek", "Łukasz", "Grzegorz", "Mateusz", "Wojciech", "Mariusz", "Dariusz",
    "Zbigniew", "Jerzy", "Maciej", "Rafał", "Kamil", "Robert", "Szymon", "Bartosz", "Filip",
    "Kacper", "Henryk", "Tadeusz", "Ryszard", "Józef", "Kazimierz", "Zdzisław", "Leszek",
    "Sławomir", "Artur", "Dawid", "Damian", "Sebastian", "Patryk", "Przemysław", "Hubert", "Igor",
    "Oskar", "Antoni", "Wiktor", "Aleksander", "Franciszek", "Nikodem", "Ignacy", "Leon", "Stefan",
    "Bogdan", "Wiesław", "Czesław", "Janusz", "Krystian",
];

const PL_FEMALE: &[&str] = &[
    "Anna", "Maria", "Katarzyna", "Małgorzata", "Agnieszka", "Barbara", "Ewa", "Krystyna",
    "Elżbieta", "Magdalena", "Joanna", "Zofia", "Monika", "Teresa", "Danuta", "Natalia", "Karolina",
    "Marta", "Aleksandra", "Beata", "Dorota", "Justyna", "Paulina", "Julia", "Alicja", "Weronika",
    "Zuzanna", "Hanna", "Jadwiga", "Halina", "Irena", "Urszula", "Grażyna", "Iwona", "Renata",
    "Sylwia", "Agata", "Edyta", "Izabela", "Emilia", "Oliwia", "Maja", "Lena", "Amelia", "Laura",
    "Wiktoria", "Gabriela", "Klaudia", "Patrycja", "Dominika", "Ewelina", "Kinga", "Milena",
    "Jolanta", "Bożena", "Wanda", "Stanisława",
];

const PL_FAMILY: &[&str] = &[
    "Nowak", "Kowalski", "Wiśniewski", "Wójcik", "Kowalczyk", "Kamiński", "Lewandowski",
    "Zieliński", "Szymański", "Woźniak", "Dąbrowski", "Kozłowski", "Jankowski", "Mazur",
    "Kwiatkowski", "Wojciechowski", "Krawczyk", "Kaczmarek", "Piotrowski", "Grabowski", "Zając",
    "Pawłowski", "Michalski", "Król", "Wieczorek", "Jabłoński", "Wróbel", "Nowakowski", "Majewski",
    "Olszewski", "Stępień", "Malinowski", "Dudek", "Adamczyk", "Dudziński", "Pietrzak",
    "Wróblewski", "Jasiński", "Zawadzki", "Sikora", "Baran", "Szewczyk", "Ostrowski", "Tomaszewski",
    "Pietrzyk", "Marciniak", "Wysocki", "Zalewski", "Jakubowski", "Sadowski", "Duda", "Włodarczyk",
    "Wilk", "Chmielewski", "Borkowski", "Sokołowski", "Szczepański", "Sawicki", "Lis", "Kucharski",
    "Kalinowski", "Mazurek", "Kubiak", "Kołodziej", "Czarnecki", "Bielecki", "Urbański", "Sobczak",
    "Konieczny", "Głowacki", "Zakrzewski", "Krajewski", "Wasilewski", "Adamski", "Laskowski",
    "Ziółkowski", "Jaworski", "Makowski", "Czerwiński", "Sobieraj", "Szczepaniak", "Kozieł",
    "Kaczmarczyk", "Kowalewski", "Witkowski", "Walczak", "Stępniak", "Górski", "Rutkowski",
    "Michalak", "Sikorski", "Baranowski", "Maciejewski", "Szulc", "Wojtczak", "Cieślak", "Gajewski",
    "Szymczak", "Nowicki", "Krupa", "Milewski",
];

const PL_CITIES: &[&str] = &[
    "Warszawa", "Kraków", "Łódź", "Wrocław", "Poznań", "Gdańsk", "Szczecin", "Bydgoszcz", "Lublin",
    "Białystok", "Katowice", "Gdynia", "Częstochowa", "Radom", "Toruń", "Sosnowiec", "Rzeszów",
    "Kielce", "Gliwice", "Olsztyn", "Zabrze", "Bielsko-Biała", "Bytom", "Zielona Góra", "Rybnik",
    "Ruda Śląska", "Opole", "Tychy", "Gorzów Wielkopolski", "Elbląg", "Płock", "Zakopane",
    "Wałbrzych", "Włocławek", "Tarnów", "Chorzów", "Koszalin", "Kalisz", "Legnica", "Grudziądz",
    "Jaworzno", "Słupsk", "Jastrzębie-Zdrój", "Nowy Sącz", "Jelenia Góra", "Siedlce", "Mysłowice",
    "Konin", "Piła", "Piotrków Trybunalski", "Inowrocław", "Lubin", "Ostrów Wielkopolski",
    "Suwałki", "Stargard", "Gniezno", "Ostrowiec Świętokrzyski", "Siemianowice Śląskie", "Głogów",
    "Pabianice", "Leszno", "Żory", "Zamość", "Pruszków", "Łomża", "Ełk", "Tomaszów Mazowiecki",
    "Chełm", "Mielec", "Kędzierzyn-Koźle", "Przemyśl", "Stalowa Wola", "Tczew", "Biała Podlaska",
    "Bełchatów", "Świdnica", "Będzin", "Zgierz", "Piekary Śląskie", "Racibórz", "Legionowo",
    "Ostrołęka", "Świętochłowice", "Wejherowo", "Zawiercie", "Starachowice", "Skierniewice",
    "Kutno", "Nysa", "Puławy", "Otwock", "Krosno", "Sopot", "Malbork", "Sandomierz",
    "Kazimierz Dolny", "Wieliczka", "Oświęcim", "Cieszyn", "Żywiec", "Augustów", "Giżycko",
    "Mikołajki", "Kołobrzeg", "Świnoujście", "Hel", "Łeba", "Ustka",
];

const UK_MALE: &[&str] = &[
    "Oleksandr", "Andriy", "Serhiy", "Volodymyr", "Mykola", "Ivan", "Vasyl", "Petro", "Yuriy",
    "Dmytro", "Oleh", "Bohdan", "Taras", "Maksym", "Artem", "Denys", "Viktor", "Roman", "Ihor",
    "Yaroslav", "Mykhailo", "Pavlo", "Stepan", "Vitaliy", "Anatoliy", "Ostap", "Danylo", "Nazar",
    "Valentyn", "Leonid", "Hryhoriy", "Yevhen", "Oleksiy", "Ruslan", "Borys", "Fedir", "Vadym",
    "Kostiantyn", "Arsen", "Matviy", "Tymofiy", "Illia", "Kyrylo", "Myroslav", "Rostyslav",
    "Sviatoslav", "Yakiv", "Zakhar", "Zinoviy", "Orest", "Markiyan", "Levko", "Semen", "Heorhiy",
    "Eduard", "Anton", "Vsevolod",
];

const UK_FEMALE: &[&str] = &[
    "Olena", "Tetiana", "Natalia", "Iryna", "Svitlana", "Oksana", "Yulia", "Kateryna", "Mariia",
    "Anna", "Liudmyla", "Halyna", "Nadiia", "Valentyna", "Larysa", "Viktoriia", "Alina", "Sofiia",
    "Anastasiia", "Daryna", "Khrystyna", "Solomiia", "Yaroslava", "Zlata", "Vira", "Lesia",
    "Oleksandra", "Polina", "Hanna", "Liliia", "Inna", "Maryna", "Alla", "Raisa", "Zoia", "Nina",
    "Uliana", "Diana", "Veronika", "Karyna", "Yevheniia", "Vladyslava", "Myroslava", "Roksolana",
    "Orysia", "Marta", "Bohdana", "Dana", "Yana", "Olha", "Ivanna", "Lada", "Nonna", "Zhanna",
    "Alisa", "Valeriia", "Kira", "Emiliia",
];

const UK_FAMILY: &[&str] = &[
    "Melnyk", "Shevchenko", "Boyko", "Kovalenko", "Bondarenko", "Tkachenko", "Kovalchuk",
    "Kravchenko", "Oliynyk", "Shevchuk", "Koval", "Polishchuk", "Bondar", "Tkachuk", "Moroz",
    "Marchenko", "Lysenko", "Rudenko", "Savchenko", "Petrenko", "Klymenko", "Pavlenko", "Savchuk",
    "Kuzmenko", "Ponomarenko", "Vasylenko", "Levchenko", "Kharchenko", "Karpenko", "Honcharenko",
    "Sydorenko", "Tymoshenko", "Kravets", "Oliynychenko", "Zinchenko", "Hrytsenko", "Prykhodko",
    "Yakovenko", "Martynenko", "Nazarenko", "Ishchenko", "Lytvynenko", "Danylenko", "Kostenko",
    "Semenko", "Romanenko", "Fedorenko", "Dmytrenko", "Kyrylenko", "Kushnir", "Tkach", "Panchenko",
    "Vlasenko", "Kuchma", "Kyrychenko", "Didenko", "Mazur", "Kolesnyk", "Ostapenko", "Pylypenko",
    "Zaiets", "Demchenko", "Horbenko", "Kvitka", "Hnatiuk", "Mykhailenko", "Stepanenko", "Shapoval",
    "Pavliuk", "Oleksiienko", "Sydoruk", "Malyk", "Yurchenko", "Kucher", "Kovtun", "Khomenko",
    "Babenko", "Voloshyn", "Holub", "Ivanenko", "Hrytsak", "Nesterenko", "Dovzhenko", "Symonenko",
    "Leshchenko", "Oliinyk", "Hordiienko", "Yaremchuk", "Fesenko", "Kalynychenko", "Zhuk", "Bilyk",
    "Soroka", "Chornyi", "Zelenko", "Kovalskyi", "Ryabchenko", "Tarasenko", "Vovk", "Sirko",
    "Hladkyi", "Lutsenko",
];

const UK_CITIES: &[&str] = &[
    "Kyiv", "Kharkiv", "Odesa", "Dnipro", "Donetsk", "Zaporizhzhia", "Lviv", "Kryvyi Rih",
    "Mykolaiv", "Mariupol", "Luhansk", "Vinnytsia", "Kherson", "Poltava", "Chernihiv", "Cherkasy",
    "Khmelnytskyi", "Zhytomyr", "Sumy", "Rivne", "Ivano-Frankivsk", "Ternopil", "Lutsk",
    "Bila Tserkva", "Kropyvnytskyi", "Uzhhorod", "Chernivtsi", "Kamianets-Podilskyi", "Makiivka",
    "Sevastopol", "Simferopol", "Horlivka", "Kamianske", "Kremenchuk", "Melitopol", "Kerch",
    "Nikopol", "Berdiansk", "Sloviansk", "Alchevsk", "Pavlohrad", "Sievierodonetsk", "Yevpatoriia",
    "Lysychansk", "Brovary", "Drohobych", "Kramatorsk", "Bakhmut", "Konotop", "Uman", "Yalta",
    "Berdychiv", "Shostka", "Kovel", "Mukachevo", "Stryi", "Boryspil", "Kalush", "Izmail",
    "Chornomorsk", "Nizhyn", "Fastiv", "Pryluky", "Lozova", "Smila", "Novomoskovsk", "Chervonohrad",
    "Oleksandriia", "Enerhodar", "Kolomyia", "Truskavets", "Yaremche", "Zhovkva", "Berehove",
    "Khust", "Vyshhorod", "Irpin", "Bucha", "Obukhiv", "Korosten", "Novohrad-Volynskyi", "Dubno",
    "Ostroh", "Kupiansk", "Izium", "Chuhuiv", "Okhtyrka", "Romny", "Hlukhiv", "Myrhorod", "Lubny",
    "Kaniv", "Korsun-Shevchenkivskyi", "Zolotonosha", "Pervomaisk", "Voznesensk",
    "Bilhorod-Dnistrovskyi", "Nova Kakhovka", "Skadovsk", "Henichesk",
];

const RU_MALE: &[&str] = &[
    "Aleksandr", "Sergey", "Dmitriy", "Andrey", "Aleksey", "Maksim", "Evgeniy", "Ivan", "Mikhail",
    "Artem", "Nikolay", "Vladimir", "Pavel", "Denis", "Roman", "Igor", "Oleg", "Konstantin",
    "Yuriy", "Anton", "Viktor", "Vadim", "Kirill", "Nikita", "Egor", "Ilya", "Stanislav", "Boris",
    "Vasiliy", "Grigoriy", "Leonid", "Valeriy", "Gennadiy", "Vyacheslav", "Arkadiy", "Fedor",
    "Matvey", "Timofey", "Lev", "Mark", "Gleb", "Yaroslav", "Vsevolod", "Semen", "Stepan", "Savva",
    "Platon", "Zakhar", "Timur", "Ruslan", "Eduard", "Valentin", "Georgiy", "Rostislav", "Emil",
    "Arseniy", "Ignat", "Filipp",
];

const RU_FEMALE: &[&str] = &[
    "Elena", "Olga", "Tatyana", "Natalya", "Irina", "Svetlana", "Ekaterina", "Anna", "Mariya",
    "Yuliya", "Anastasiya", "Marina", "Lyudmila", "Galina", "Nadezhda", "Valentina", "Larisa",
    "Viktoriya", "Darya", "Kseniya", "Polina", "Alina", "Sofiya", "Vera", "Lyubov", "Oksana",
    "Vasilisa", "Arina", "Zoya", "Raisa", "Antonina", "Nina", "Tamara", "Valeriya", "Inna", "Alla",
    "Zhanna", "Evgeniya", "Margarita", "Veronika", "Elizaveta", "Alisa", "Ulyana", "Kira",
    "Varvara", "Milana", "Diana", "Taisiya", "Yana", "Karina", "Angelina", "Alena", "Kristina",
    "Evelina", "Violetta", "Eva", "Snezhana",
];

const RU_FAMILY: &[&str] = &[
    "Ivanov", "Smirnov", "Kuznetsov", "Popov", "Vasilyev", "Petrov", "Sokolov", "Mikhailov",
    "Novikov", "Fedorov", "Morozov", "Volkov", "Alekseev", "Lebedev", "Semenov", "Egorov", "Pavlov",
    "Kozlov", "Stepanov", "Nikolaev", "Orlov", "Andreev", "Makarov", "Nikitin", "Zakharov",
    "Zaitsev", "Solovyov", "Borisov", "Yakovlev", "Grigoryev", "Romanov", "Vorobyov", "Belov",
    "Tarasov", "Belyaev", "Komarov", "Kiselev", "Frolov", "Gusev", "Ilyin", "Titov", "Kuzmin",
    "Kudryavtsev", "Baranov", "Kulikov", "Sorokin", "Sergeev", "Vinogradov", "Vasiliev", "Bogdanov",
    "Voronin", "Gavrilov", "Medvedev", "Ershov", "Nikiforov", "Sobolev", "Tikhonov", "Gerasimov",
    "Ponomarev", "Kalinin", "Grishin", "Dmitriev", "Kazakov", "Denisov", "Maksimov", "Osipov",
    "Kovalev", "Gromov", "Fomin", "Davydov", "Melnikov", "Shcherbakov", "Blinov", "Kolesnikov",
    "Karpov", "Afanasyev", "Vlasov", "Maslov", "Isakov", "Tikhomirov", "Aksenov", "Rodionov",
    "Kotov", "Gorbunov", "Kudryashov", "Bykov", "Zuev", "Tretyakov", "Savelyev", "Panov", "Rybakov",
    "Suvorov", "Abramov", "Voronov", "Mukhin", "Arkhipov", "Trofimov", "Martynov", "Emelyanov",
    "Gorshkov", "Chernov", "Ovchinnikov", "Seleznev", "Panfilov",
];

const RU_CITIES: &[&str] = &[
    "Moskva", "Sankt-Peterburg", "Novosibirsk", "Yekaterinburg", "Kazan", "Nizhniy Novgorod",
    "Chelyabinsk", "Samara", "Omsk", "Rostov-na-Donu", "Ufa", "Krasnoyarsk", "Voronezh", "Perm",
    "Volgograd", "Krasnodar", "Saratov", "Tyumen", "Tolyatti", "Izhevsk", "Barnaul", "Irkutsk",
    "Khabarovsk", "Yaroslavl", "Vladivostok", "Tomsk", "Orenburg", "Kaliningrad", "Ryazan", "Sochi",
    "Ulyanovsk", "Makhachkala", "Tver", "Bryansk", "Ivanovo", "Belgorod", "Surgut", "Vladimir",
    "Chita", "Nizhniy Tagil", "Arkhangelsk", "Kaluga", "Smolensk", "Kurgan", "Cheboksary", "Kirov",
    "Orel", "Vologda", "Yakutsk", "Vladikavkaz", "Murmansk", "Podolsk", "Tambov", "Grozny",
    "Sterlitamak", "Petrozavodsk", "Kostroma", "Nizhnevartovsk", "Novorossiysk", "Yoshkar-Ola",
    "Naberezhnye Chelny", "Lipetsk", "Penza", "Astrakhan", "Kemerovo", "Novokuznetsk", "Stavropol",
    "Magnitogorsk", "Taganrog", "Komsomolsk-na-Amure", "Syktyvkar", "Nalchik", "Shakhty",
    "Dzerzhinsk", "Orsk", "Angarsk", "Blagoveshchensk", "Veliky Novgorod", "Pskov", "Biysk",
    "Prokopyevsk", "Rybinsk", "Balakovo", "Armavir", "Severodvinsk", "Korolyov",
    "Petropavlovsk-Kamchatsky", "Norilsk", "Syzran", "Volzhsky", "Mytishchi", "Lyubertsy",
    "Zlatoust", "Kamensk-Uralsky", "Abakan", "Ulan-Ude", "Khimki", "Yuzhno-Sakhalinsk", "Magadan",
    "Salekhard", "Suzdal", "Sergiyev Posad", "Pyatigorsk", "Kislovodsk", "Anapa", "Gelendzhik",
    "Vyborg", "Zelenograd", "Obninsk", "Dubna",
];

const CS_MALE: &[&str] = &[
    "Jiří", "Jan", "Petr", "Josef", "Pavel", "Martin", "Tomáš", "Jaroslav", "Miroslav", "Zdeněk",
    "Václav", "Michal", "František", "Jakub", "Milan", "Karel", "Lukáš", "David", "Ondřej",
    "Vojtěch", "Matěj", "Adam", "Filip", "Radek", "Marek", "Daniel", "Roman", "Vladimír",
    "Stanislav", "Ladislav", "Antonín", "Luboš", "Libor", "Aleš", "Vít", "Štěpán", "Dominik",
    "Šimon", "Tadeáš", "Kryštof", "Hynek", "Vilém", "Bohumil", "Bohuslav", "Jindřich", "Oldřich",
    "Vlastimil", "Přemysl", "Kamil", "Richard", "Patrik", "Denis", "Robert", "Ivan", "Igor",
    "Viktor", "Rostislav",
];

const CS_FEMALE: &[&str] = &[
    "Jana", "Marie", "Eva", "Hana", "Anna", "Lenka", "Kateřina", "Lucie", "Věra", "Alena", "Petra",
    "Jaroslava", "Veronika", "Martina", "Tereza", "Michaela", "Ludmila", "Helena", "Zdeňka",
    "Ivana", "Monika", "Eliška", "Adéla", "Barbora", "Kristýna", "Markéta", "Klára", "Natálie",
    "Dagmar", "Irena", "Miroslava", "Olga", "Pavla", "Šárka", "Simona", "Gabriela", "Renata",
    "Romana", "Vladimíra", "Dana", "Jitka", "Blanka", "Zuzana", "Karolína", "Nikola", "Sofie",
    "Viktorie", "Rozálie", "Julie", "Ema", "Amálie", "Laura", "Anežka", "Magdaléna", "Vendula",
    "Denisa", "Milena", "Stanislava",
];

const CS_FAMILY: &[&str] = &[
    "Novák", "Svoboda", "Novotný", "Dvořák", "Černý", "Procházka", "Kučera", "Veselý", "Horák",
    "Němec", "Pokorný", "Marek", "Pospíšil", "Hájek", "Jelínek", "Král", "Růžička", "Beneš",
    "Fiala", "Sedláček", "Doležal", "Zeman", "Kolář", "Navrátil", "Čermák", "Urban", "Vaněk",
    "Blažek", "Kříž", "Kovář", "Bartoš", "Vlček", "Šimek", "Bláha", "Holub", "Konečný", "Malý",
    "Čech", "Havlíček", "Štěpánek", "Musil", "Šťastný", "Matoušek", "Krejčí", "Mareš", "Vávra",
    "Kopecký", "Mach", "Staněk", "Kadlec", "Soukup", "Bureš", "Šindelář", "Hruška", "Tichý",
    "Kratochvíl", "Polák", "Havel", "Moravec", "Hudec", "Hrubý", "Kalina", "Skála", "Bartošek",
    "Toman", "Šebesta", "Janda", "Sýkora", "Vondra", "Holý", "Klíma", "Trnka", "Ryba", "Adámek",
    "Paleček", "Chalupa", "Lukáš", "Brabec", "Dušek", "Kubát", "Fišer", "Sládek", "Mráz", "Vacek",
    "Říha", "Zelenka", "Štěpán", "Kubíček", "Hanák", "Ševčík", "Kozel", "Jirásek", "Tůma", "Kašpar",
    "Macháček", "Pavlík", "Šulc", "Slavík", "Rybář", "Dostál", "Hrdina", "Pešek", "Vojtek",
    "Koubek",
];

const CS_CITIES: &[&str] = &[
    "Praha", "Brno", "Ostrava", "Plzeň", "Liberec", "Olomouc", "České Budějovice", "Hradec Králové",
    "Ústí nad Labem", "Pardubice", "Zlín", "Havířov", "Kladno", "Most", "Opava", "Frýdek-Místek",
    "Karviná", "Jihlava", "Teplice", "Děčín", "Karlovy Vary", "Chomutov", "Jablonec nad Nisou",
    "Mladá Boleslav", "Prostějov", "Přerov", "Třebíč", "Kutná Hora", "Český Krumlov", "Znojmo",
    "Orlová", "Třinec", "Tábor", "Příbram", "Cheb", "Trutnov", "Chrudim", "Kolín", "Písek",
    "Kroměříž", "Šumperk", "Vsetín", "Uherské Hradiště", "Břeclav", "Hodonín", "Český Těšín",
    "Litoměřice", "Nový Jičín", "Krnov", "Litvínov", "Havlíčkův Brod", "Sokolov",
    "Valašské Meziříčí", "Strakonice", "Klatovy", "Kopřivnice", "Jindřichův Hradec", "Vyškov",
    "Žďár nad Sázavou", "Blansko", "Náchod", "Bohumín", "Jirkov", "Žatec", "Louny", "Kadaň",
    "Rakovník", "Beroun", "Benešov", "Kralupy nad Vltavou", "Mělník", "Nymburk", "Poděbrady",
    "Jičín", "Rychnov nad Kněžnou", "Svitavy", "Ústí nad Orlicí", "Česká Lípa", "Turnov", "Semily",
    "Mariánské Lázně", "Františkovy Lázně", "Domažlice", "Tachov", "Rokycany", "Pelhřimov", "Telč",
    "Mikulov", "Valtice", "Lednice", "Slavkov u Brna", "Boskovice", "Hranice", "Lipník nad Bečvou",
    "Rožnov pod Radhoštěm", "Frenštát pod Radhoštěm", "Bruntál", "Jeseník",
];

const SV_MALE: &[&str] = &[
    "Lars", "Mikael", "Anders", "Johan", "Erik", "Per", "Karl", "Peter", "Jan", "Thomas", "Daniel",
    "Fredrik", "Hans", "Bengt", "Magnus", "Stefan", "Mats", "Oskar", "Lucas", "William", "Hugo",
    "Elias", "Axel", "Nils", "Gustav", "Viktor", "Filip", "Emil", "Leif", "Sven", "Göran", "Ulf",
    "Åke", "Bo", "Kjell", "Rolf", "Gunnar", "Ingemar", "Björn", "Henrik", "Martin", "Andreas",
    "Jonas", "Simon", "Alexander", "Adam", "Isak", "Liam", "Noah", "Leo", "Ludvig", "Olle",
    "Sixten", "Vincent", "Theo", "Melvin", "Edvin", "Harald",
];

const SV_FEMALE: &[&str] = &[
    "Anna", "Eva", "Maria", "Karin", "Sara", "Kristina", "Lena", "Emma", "Kerstin", "Ingrid",
    "Marie", "Malin", "Jenny", "Hanna", "Linnea", "Elsa", "Alice", "Maja", "Wilma", "Ebba",
    "Astrid", "Saga", "Freja", "Agnes", "Klara", "Sofia", "Ida", "Elin", "Birgitta", "Elisabeth",
    "Margareta", "Ulla", "Inger", "Gunilla", "Monica", "Susanne", "Helena", "Annika", "Camilla",
    "Therese", "Josefin", "Johanna", "Frida", "Matilda", "Ella", "Olivia", "Selma", "Vera",
    "Stella", "Alva", "Majken", "Tilde", "Signe", "Ellen", "Stina", "Ingela", "Linda", "Emelie",
];

const SV_FAMILY: &[&str] = &[
    "Andersson", "Johansson", "Karlsson", "Nilsson", "Eriksson", "Larsson", "Olsson", "Persson",
    "Svensson", "Gustafsson", "Pettersson", "Jonsson", "Jansson", "Hansson", "Bengtsson", "Jönsson",
    "Lindberg", "Jakobsson", "Magnusson", "Olofsson", "Lindström", "Lindqvist", "Lindgren", "Berg",
    "Axelsson", "Bergström", "Lundberg", "Lind", "Lundgren", "Lundqvist", "Mattsson", "Berglund",
    "Fredriksson", "Sandberg", "Henriksson", "Forsberg", "Sjöberg", "Wallin", "Engström", "Eklund",
    "Danielsson", "Lundin", "Håkansson", "Björk", "Bergman", "Gunnarsson", "Holm", "Wikström",
    "Samuelsson", "Isaksson", "Fransson", "Bergqvist", "Nyström", "Holmberg", "Arvidsson",
    "Löfgren", "Söderberg", "Nyberg", "Blomqvist", "Claesson", "Nordström", "Mårtensson",
    "Lundström", "Viklund", "Björklund", "Eliasson", "Pålsson", "Berggren", "Sandström", "Lund",
    "Nordin", "Ström", "Åberg", "Hermansson", "Ekström", "Holmgren", "Sundberg", "Hedlund",
    "Dahlberg", "Hellström", "Sjögren", "Abrahamsson", "Falk", "Martinsson", "Öberg", "Andreasson",
    "Blom", "Ek", "Månsson", "Strand", "Åkesson", "Dahl", "Hedberg", "Sundström", "Lindholm",
    "Jonasson", "Nordqvist",
];

const SV_CITIES: &[&str] = &[
    "Stockholm", "Göteborg", "Malmö", "Uppsala", "Västerås", "Örebro", "Linköping", "Helsingborg",
    "Jönköping", "Norrköping", "Lund", "Umeå", "Gävle", "Borås", "Södertälje", "Eskilstuna",
    "Halmstad", "Växjö", "Karlstad", "Sundsvall", "Östersund", "Trollhättan", "Luleå", "Kalmar",
    "Kristianstad", "Skövde", "Falun", "Visby", "Kiruna", "Karlskrona", "Täby", "Sollentuna",
    "Nacka", "Huddinge", "Botkyrka", "Haninge", "Järfälla", "Solna", "Sundbyberg", "Lidingö",
    "Mölndal", "Kungsbacka", "Varberg", "Falkenberg", "Landskrona", "Trelleborg", "Ystad",
    "Ängelholm", "Hässleholm", "Karlshamn", "Ronneby", "Västervik", "Motala", "Nyköping",
    "Katrineholm", "Enköping", "Sigtuna", "Norrtälje", "Köping", "Arboga", "Sala", "Fagersta",
    "Avesta", "Borlänge", "Ludvika", "Mora", "Hudiksvall", "Söderhamn", "Bollnäs", "Sandviken",
    "Härnösand", "Örnsköldsvik", "Sollefteå", "Skellefteå", "Piteå", "Boden", "Gällivare",
    "Haparanda", "Arvika", "Kristinehamn", "Karlskoga", "Lidköping", "Mariestad", "Alingsås",
    "Lerum", "Kungälv", "Uddevalla", "Strömstad", "Vänersborg", "Ulricehamn", "Värnamo", "Nässjö",
    "Vetlanda", "Ljungby", "Oskarshamn", "Vimmerby", "Mjölby", "Åre", "Sälen", "Simrishamn",
];

const NO_MALE: &[&str] = &[
    "Jan", "Per", "Bjørn", "Ole", "Lars", "Kjell", "Knut", "Arne", "Svein", "Thomas", "Hans",
    "Geir", "Tor", "Morten", "Terje", "Odd", "Erik", "Martin", "Andreas", "Jon", "Magnus", "Jakob",
    "Emil", "Henrik", "Sindre", "Eirik", "Håkon", "Aksel", "Rune", "Trond", "Helge", "Gunnar",
    "Tore", "Rolf", "Stein", "Harald", "Leif", "Øyvind", "Kristian", "Espen", "Anders", "Christian",
    "Stian", "Marius", "Sander", "Mathias", "Tobias", "Filip", "William", "Oskar", "Isak", "Olav",
    "Nikolai", "Even", "Vegard", "Trygve", "Sigurd", "Halvor",
];

const NO_FEMALE: &[&str] = &[
    "Anne", "Inger", "Kari", "Marit", "Ingrid", "Liv", "Eva", "Berit", "Astrid", "Bjørg", "Hilde",
    "Anna", "Solveig", "Marianne", "Randi", "Ida", "Nina", "Maria", "Elisabeth", "Kristin", "Nora",
    "Emma", "Sofie", "Ingeborg", "Sigrid", "Tuva", "Silje", "Ragnhild", "Hanne", "Heidi", "Mona",
    "Tone", "Grete", "Camilla", "Hege", "Linn", "Ingvild", "Marte", "Mari", "Synnøve", "Guro",
    "Vilde", "Thea", "Maja", "Ella", "Frida", "Hedda", "Live", "Amalie", "Oda", "Selma", "Mathilde",
    "Aurora", "Tiril", "Eli", "Gunhild", "Torill",
];

const NO_FAMILY: &[&str] = &[
    "Hansen", "Johansen", "Olsen", "Larsen", "Andersen", "Pedersen", "Nilsen", "Kristiansen",
    "Jensen", "Karlsen", "Johnsen", "Pettersen", "Eriksen", "Berg", "Haugen", "Hagen",
    "Johannessen", "Andreassen", "Jacobsen", "Dahl", "Jørgensen", "Halvorsen", "Henriksen", "Lund",
    "Sørensen", "Jakobsen", "Moen", "Gundersen", "Iversen", "Strand", "Solberg", "Bakken",
    "Haugland", "Knutsen", "Eide", "Lie", "Martinsen", "Paulsen", "Bakke", "Amundsen", "Holm",
    "Nguyen", "Rasmussen", "Kristoffersen", "Lien", "Berntsen", "Ali", "Kristensen", "Moe",
    "Nygård", "Fredriksen", "Ellingsen", "Solheim", "Mathisen", "Aas", "Myklebust", "Thorsen",
    "Dahle", "Hauge", "Sætre", "Berge", "Brekke", "Aasen", "Nielsen", "Isaksen", "Rønning", "Tveit",
    "Evensen", "Tangen", "Lunde", "Næss", "Ruud", "Hovland", "Wold", "Aune", "Antonsen",
    "Mikkelsen", "Vik", "Birkeland", "Lorentzen", "Løken", "Nilssen", "Torgersen", "Edvardsen",
    "Fjeld", "Helland", "Sandvik", "Økland", "Gjerde", "Kvam", "Johannesen", "Hovde", "Myhre",
];

const NO_CITIES: &[&str] = &[
    "Oslo", "Bergen", "Trondheim", "Stavanger", "Drammen", "Fredrikstad", "Kristiansand", "Sandnes",
    "Tromsø", "Sarpsborg", "Skien", "Ålesund", "Sandefjord", "Haugesund", "Tønsberg", "Moss",
    "Porsgrunn", "Bodø", "Arendal", "Hamar", "Larvik", "Halden", "Lillehammer", "Molde", "Harstad",
    "Gjøvik", "Kongsberg", "Narvik", "Alta", "Hammerfest", "Asker", "Bærum", "Lørenskog", "Ski",
    "Jessheim", "Lillestrøm", "Kongsvinger", "Elverum", "Horten", "Holmestrand", "Kragerø",
    "Grimstad", "Lillesand", "Mandal", "Flekkefjord", "Egersund", "Bryne", "Kopervik", "Stord",
    "Leirvik", "Voss", "Odda", "Førde", "Florø", "Sogndal", "Ørsta", "Volda", "Kristiansund",
    "Orkanger", "Steinkjer", "Levanger", "Stjørdal", "Namsos", "Mo i Rana", "Mosjøen",
    "Sandnessjøen", "Brønnøysund", "Fauske", "Svolvær", "Leknes", "Sortland", "Finnsnes", "Vadsø",
    "Vardø", "Kirkenes", "Honningsvåg", "Longyearbyen", "Hønefoss", "Notodden", "Rjukan", "Raufoss",
    "Otta", "Røros", "Oppdal", "Geilo", "Hemsedal", "Åndalsnes", "Stavern", "Risør", "Tvedestrand",
    "Farsund", "Sauda", "Nesbyen", "Fagernes", "Brumunddal", "Moelv", "Åsgårdstrand", "Drøbak",
    "Son", "Mysen", "Askim",
];

const DA_MALE: &[&str] = &[
    "Peter", "Jens", "Lars", "Michael", "Henrik", "Søren", "Thomas", "Jan", "Niels", "Morten",
    "Anders", "Jesper", "Martin", "Rasmus", "Mads", "Christian", "Kasper", "Frederik", "Mikkel",
    "Jonas", "Magnus", "Emil", "Oliver", "William", "Noah", "Lucas", "Victor", "Malthe", "Hans",
    "Jørgen", "Ole", "Erik", "Poul", "Bent", "Per", "Finn", "Flemming", "Kim", "Carsten", "Allan",
    "Brian", "Bo", "Claus", "Torben", "Steen", "Johan", "Alexander", "Sebastian", "Tobias", "Oscar",
    "Alfred", "Carl", "Villads", "Elias", "Valdemar", "August", "Anton", "Aksel",
];

const DA_FEMALE: &[&str] = &[
    "Anne", "Kirsten", "Mette", "Hanne", "Helle", "Anna", "Susanne", "Lene", "Maria", "Marianne",
    "Lone", "Camilla", "Pia", "Louise", "Charlotte", "Tina", "Gitte", "Ida", "Emma", "Sofie",
    "Freja", "Clara", "Laura", "Karoline", "Mathilde", "Josefine", "Cecilie", "Signe", "Inge",
    "Jette", "Birgit", "Karen", "Bente", "Lisbeth", "Dorthe", "Tove", "Vibeke", "Rikke", "Maja",
    "Line", "Julie", "Sara", "Nanna", "Astrid", "Alma", "Agnes", "Ella", "Olivia", "Alberte",
    "Esther", "Liva", "Vigga", "Asta", "Lærke", "Frida", "Isabella", "Katrine", "Stine",
];

const DA_FAMILY: &[&str] = &[
    "Nielsen", "Jensen", "Hansen", "Pedersen", "Andersen", "Christensen", "Larsen", "Sørensen",
    "Rasmussen", "Jørgensen", "Petersen", "Madsen", "Kristensen", "Olsen", "Thomsen",
    "Christiansen", "Poulsen", "Johansen", "Møller", "Mortensen", "Knudsen", "Jakobsen",
    "Mikkelsen", "Olesen", "Frederiksen", "Laursen", "Henriksen", "Lund", "Holm", "Schmidt",
    "Eriksen", "Kristiansen", "Jeppesen", "Clausen", "Pallesen", "Bertelsen", "Lauridsen", "Kjær",
    "Nissen", "Mogensen", "Bach", "Bruun", "Hald", "Iversen", "Dam", "Nørgaard", "Lassen",
    "Jacobsen", "Carlsen", "Vestergaard", "Thygesen", "Thorsen", "Kjeldsen", "Søndergaard",
    "Villadsen", "Winther", "Berg", "Svendsen", "Enevoldsen", "Gregersen", "Ravn", "Brandt", "Dahl",
    "Bang", "Toft", "Mathiasen", "Jessen", "Krogh", "Nygaard", "Eskildsen", "Lind", "Bjerre",
    "Skov", "Bak", "Juhl", "Østergaard", "Overgaard", "Ebbesen", "Lorentzen", "Dalgaard",
    "Damgaard", "Schou", "Vinther", "Steffensen", "Friis", "Kofoed",
];

const DA_CITIES: &[&str] = &[
    "København", "Aarhus", "Odense", "Aalborg", "Esbjerg", "Randers", "Kolding", "Horsens", "Vejle",
    "Roskilde", "Herning", "Hørsholm", "Helsingør", "Silkeborg", "Næstved", "Fredericia", "Viborg",
    "Køge", "Holstebro", "Taastrup", "Slagelse", "Hillerød", "Sønderborg", "Svendborg", "Hjørring",
    "Holbæk", "Frederikshavn", "Nørresundby", "Ringsted", "Skagen", "Frederiksberg", "Gentofte",
    "Gladsaxe", "Lyngby", "Ballerup", "Hvidovre", "Glostrup", "Albertslund", "Ishøj", "Greve",
    "Solrød Strand", "Stege", "Vordingborg", "Nykøbing Falster", "Nakskov", "Maribo", "Rødby",
    "Kalundborg", "Korsør", "Sorø", "Haslev", "Faxe", "Frederikssund", "Frederiksværk", "Hundested",
    "Gilleleje", "Hornbæk", "Fredensborg", "Birkerød", "Farum", "Værløse", "Middelfart", "Nyborg",
    "Faaborg", "Assens", "Bogense", "Kerteminde", "Rudkøbing", "Ærøskøbing", "Haderslev",
    "Aabenraa", "Tønder", "Ribe", "Varde", "Grindsted", "Billund", "Give", "Brande", "Ikast",
    "Skjern", "Ringkøbing", "Lemvig", "Struer", "Skive", "Thisted", "Nykøbing Mors", "Hobro",
    "Mariager", "Hadsund", "Brønderslev", "Sæby", "Hirtshals", "Løkken", "Grenaa", "Ebeltoft",
    "Skanderborg", "Odder", "Hammel", "Hadsten", "Hinnerup", "Rønne", "Nexø", "Svaneke", "Allinge",
];

const FI_MALE: &[&str] = &[
    "Juha", "Timo", "Matti", "Kari", "Mikko", "Jari", "Antti", "Jukka", "Mika", "Markku", "Pekka",
    "Hannu", "Heikki", "Seppo", "Janne", "Ari", "Sami", "Ville", "Petri", "Lauri", "Eino", "Väinö",
    "Onni", "Leo", "Elias", "Oliver", "Aleksi", "Joonas", "Jorma", "Pertti", "Erkki", "Ilkka",
    "Raimo", "Martti", "Veikko", "Tapani", "Olavi", "Kalevi", "Risto", "Esa", "Harri", "Marko",
    "Tommi", "Teemu", "Toni", "Jussi", "Riku", "Niko", "Eetu", "Otto", "Veeti", "Aatu", "Juho",
    "Arttu", "Rasmus", "Akseli", "Valtteri", "Topias",
];

const FI_FEMALE: &[&str] = &[
    "Tuula", "Anne", "Päivi", "Anna", "Ritva", "Leena", "Pirjo", "Sari", "Minna", "Tiina",
    "Marjatta", "Riitta", "Johanna", "Aino", "Eeva", "Helmi", "Sofia", "Aada", "Emma", "Venla",
    "Ella", "Lilja", "Olivia", "Iida", "Kaisa", "Laura", "Hanna", "Satu", "Marja", "Kaarina",
    "Sirpa", "Eija", "Merja", "Arja", "Seija", "Helena", "Elina", "Katja", "Susanna", "Heidi",
    "Jenni", "Noora", "Milla", "Henna", "Anni", "Emilia", "Pihla", "Siiri", "Ilona", "Lotta",
    "Veera", "Nelli", "Aurora", "Oona", "Saara", "Inkeri", "Maarit",
];

const FI_FAMILY: &[&str] = &[
    "Korhonen", "Virtanen", "Mäkinen", "Nieminen", "Mäkelä", "Hämäläinen", "Laine", "Heikkinen",
    "Koskinen", "Järvinen", "Lehtonen", "Lehtinen", "Saarinen", "Salminen", "Heinonen", "Niemi",
    "Heikkilä", "Kinnunen", "Salonen", "Turunen", "Salo", "Laitinen", "Tuominen", "Rantanen",
    "Karjalainen", "Jokinen", "Mattila", "Savolainen", "Lahtinen", "Ahonen", "Hiltunen", "Leinonen",
    "Heiskanen", "Hirvonen", "Miettinen", "Pitkänen", "Anttila", "Koivisto", "Lappalainen",
    "Aaltonen", "Hakala", "Laaksonen", "Räsänen", "Manninen", "Leppänen", "Kettunen", "Toivonen",
    "Koponen", "Mustonen", "Seppälä", "Laitila", "Väisänen", "Kallio", "Lindholm", "Pesonen",
    "Vainio", "Harju", "Jääskeläinen", "Lehto", "Nurmi", "Ojala", "Lindqvist", "Halonen",
    "Rautiainen", "Peltonen", "Huttunen", "Hyvönen", "Kokkonen", "Tanskanen", "Vesterinen",
    "Oksanen", "Ketola", "Suominen", "Honkanen", "Korpela", "Granström", "Lundqvist", "Kivelä",
    "Rinne", "Aalto", "Tuomi", "Ruotsalainen", "Ikonen", "Pulkkinen", "Kauppinen", "Ahola",
    "Jokela", "Hänninen", "Mattsson", "Valtonen", "Palonen",
];

const FI_CITIES: &[&str] = &[
    "Helsinki", "Espoo", "Tampere", "Vantaa", "Oulu", "Turku", "Jyväskylä", "Lahti", "Kuopio",
    "Pori", "Kouvola", "Joensuu", "Lappeenranta", "Hämeenlinna", "Vaasa", "Seinäjoki", "Rovaniemi",
    "Mikkeli", "Kotka", "Salo", "Porvoo", "Kokkola", "Hyvinkää", "Lohja", "Järvenpää", "Rauma",
    "Kajaani", "Kerava", "Savonlinna", "Nokia", "Vihti", "Kirkkonummi", "Tuusula", "Nurmijärvi",
    "Sipoo", "Kangasala", "Lempäälä", "Ylöjärvi", "Pirkkala", "Kaarina", "Raisio", "Naantali",
    "Uusikaupunki", "Loimaa", "Forssa", "Riihimäki", "Heinola", "Imatra", "Hamina", "Loviisa",
    "Raasepori", "Hanko", "Tammisaari", "Mariehamn", "Kemi", "Tornio", "Kemijärvi", "Sodankylä",
    "Inari", "Kittilä", "Ivalo", "Kuusamo", "Raahe", "Ylivieska", "Kalajoki", "Pietarsaari",
    "Uusikaarlepyy", "Kristiinankaupunki", "Kauhajoki", "Lapua", "Kauhava", "Alavus", "Ähtäri",
    "Jämsä", "Äänekoski", "Saarijärvi", "Keuruu", "Varkaus", "Pieksämäki", "Iisalmi", "Suonenjoki",
    "Nurmes", "Lieksa", "Kitee", "Outokumpu", "Sotkamo", "Suomussalmi", "Kuhmo", "Orimattila",
    "Hollola", "Valkeakoski", "Akaa", "Sastamala", "Huittinen", "Kankaanpää", "Parkano",
    "Ikaalinen", "Mänttä-Vilppula", "Orivesi",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lists_have_no_duplicates() {
        for locale in Locale::ALL {
            let table = names(locale);
            for list in [table.male, table.female, table.family, cities(locale)] {
                let unique: HashSet<_> = list.iter().collect();
                assert_eq!(unique.len(), list.len(), "duplicate entry in {locale}");
            }
        }
        let pets: HashSet<_> = PET_NAMES.iter().collect();
        assert_eq!(pets.len(), PET_NAMES.len());
    }
}
