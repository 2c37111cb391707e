use toponym_core::model::generator::WordGenerator;

/// English town names used as the training corpus.
const TRAIN_DATA: &[&str] = &[
    "abingdon", "accrington", "acle", "acton", "adlington", "alcester", "aldeburgh",
    "aldershot", "alford", "alfreton", "alnwick", "alsager", "alston", "alton", "altrincham",
    "amble", "ambleside", "amersham", "amesbury", "ampthill", "andover", "appleby", "arlesey",
    "arundel", "ashbourne", "ashburton", "ashby", "ashford", "ashington", "ashton", "askern",
    "aspatria", "atherstone", "attleborough", "axbridge", "axminster", "aylesbury", "aylsham",
    "bacup", "bakewell", "bampton", "banbury", "barking", "barnard", "barnes", "barnet",
    "barnoldswick", "barnsley", "barnstaple", "barrow", "barton", "basildon", "basingstoke",
    "batley", "battle", "bawtry", "beaconsfield", "beaminster", "bebington", "beccles",
    "beckenham", "bedale", "bedford", "bedworth", "belper", "bentham", "berkeley",
    "berkhamsted", "berwick", "beverley", "bewdley", "bexhill", "bexley", "bicester",
    "biddulph", "bideford", "biggleswade", "billericay", "billingham", "bilston", "bingham",
    "bingley", "birchwood", "birkenhead", "bishop", "blackburn", "blackpool", "blackrod",
    "blackwater", "blandford", "bletchley", "blyth", "bodmin", "bognor", "bollington",
    "bolsover", "bolton", "bootle", "bordon", "boroughbridge", "boston", "bottesford",
    "bourne", "bournemouth", "bovey", "brackley", "bracknell", "bradford", "brading",
    "bradley", "bradninch", "braintree", "brampton", "brandon", "braunstone", "brentford",
    "brentwood", "bridgnorth", "bridgwater", "bridlington", "bridport", "brierfield",
    "brierley", "brigg", "brighouse", "brightlingsea", "brixham", "broadstairs",
    "bromborough", "bromley", "bromsgrove", "bromyard", "broseley", "brough", "broughton",
    "bruton", "buckfastleigh", "buckingham", "bude", "budleigh", "bulwell", "bungay",
    "buntingford", "burford", "burgess", "burgh", "burnham", "burnley", "burntwood",
    "burslem", "burton", "bury", "bushey", "buxton", "caistor", "callington", "calne",
    "camborne", "camelford", "cannock", "canvey", "carlton", "carnforth", "carshalton",
    "carterton", "castle", "castleford", "chagford", "chapel", "chard", "charlbury",
    "chatham", "chatteris", "cheadle", "cheltenham", "chertsey", "chesham", "cheshunt",
    "chester", "chesterfield", "chickerell", "chilton", "chingford", "chippenham",
    "chipping", "chorley", "chorleywood", "christchurch", "chudleigh", "chulmleigh",
    "church", "cinderford", "cirencester", "clare", "clay", "cleator", "cleethorpes",
    "cleobury", "clevedon", "clitheroe", "clun", "cockermouth", "coggeshall", "colburn",
    "colchester", "coleford", "coleshill", "colne", "colyton", "congleton", "conisbrough",
    "corbridge", "corby", "corringham", "corsham", "cotgrave", "coulsdon", "cowes",
    "cramlington", "cranbrook", "craven", "crawley", "crediton", "crewe", "crewkerne",
    "cricklade", "cromer", "crook", "crosby", "crowborough", "crowland", "crowle",
    "croydon", "cullompton", "dagenham", "dalton", "darley", "darlington", "dartford",
    "dartmouth", "darwen", "daventry", "dawley", "dawlish", "deal", "denholme", "dereham",
    "desborough", "devizes", "dewsbury", "didcot", "dinnington", "diss", "doncaster",
    "dorchester", "dorking", "dover", "dovercourt", "downham", "driffield", "droitwich",
    "dronfield", "dudley", "dukinfield", "dulverton", "dunstable", "dunwich", "dursley",
    "ealing", "earby", "earl", "earley", "easingwold", "east", "eastbourne", "eastleigh",
    "eastwood", "eccles", "eccleshall", "edenbridge", "edgware", "edmonton", "egremont",
    "elland", "ellesmere", "elstree", "emsworth", "enfield", "epping", "epworth", "erith",
    "eton", "evesham", "exmouth", "eye", "fairford", "fakenham", "falmouth", "fareham",
    "faringdon", "farnham", "faversham", "fazeley", "featherstone", "felixstowe",
    "ferndown", "ferryhill", "filey", "filton", "finchley", "fleet", "fleetwood",
    "flitwick", "folkestone", "fordbridge", "fordingbridge", "fordwich", "fowey",
    "framlingham", "frinton", "frodsham", "frome", "gainsborough", "garstang", "gateshead",
    "gillingham", "glastonbury", "glossop", "godalming", "godmanchester", "goole",
    "gorleston", "gosport", "grange", "grantham", "grassington", "gravesend", "grays",
    "great", "greater", "grimsby", "guildford", "guisborough", "hadleigh", "hailsham",
    "halesowen", "halesworth", "halewood", "halifax", "halstead", "haltwhistle", "harlow",
    "harpenden", "harrogate", "harrow", "hartland", "hartlepool", "harwich", "harworth",
    "haslemere", "haslingden", "hastings", "hatfield", "hatherleigh", "havant",
    "haverhill", "hawes", "hawkinge", "haxby", "hayle", "haywards", "heanor", "heathfield",
    "hebden", "hedge", "hednesford", "hedon", "helmsley", "helston", "hemel", "hemsworth",
    "hendon", "henley", "hertford", "hessle", "hetton", "hexham", "heywood", "high",
    "higham", "highbridge", "highworth", "hinckley", "hingham", "hitchin", "hoddesdon",
    "holbeach", "holsworthy", "holt", "honiton", "horley", "horncastle", "hornsea",
    "hornsey", "horsforth", "horsham", "horwich", "houghton", "hounslow", "howden",
    "huddersfield", "hungerford", "hunstanton", "huntingdon", "hyde", "hythe", "ilford",
    "ilfracombe", "ilkeston", "ilkley", "ilminster", "immingham", "ingleby", "ipswich",
    "irthlingborough", "ivybridge", "jarrow", "keighley", "kempston", "kendal",
    "kenilworth", "kesgrave", "keswick", "kettering", "keynsham", "kidderminster",
    "kidsgrove", "kimberley", "kingsbridge", "kingsteignton", "kingston", "kington",
    "kirkby", "kirkbymoorside", "kirkham", "kirton", "knaresborough", "knutsford",
    "langport", "launceston", "leatherhead", "lechlade", "ledbury", "leek", "leigh",
    "leighton", "leiston", "leominster", "letchworth", "lewes", "leyburn", "leyton",
    "liskeard", "littlehampton", "loddon", "loftus", "long", "longridge", "longtown",
    "looe", "lostwithiel", "loughborough", "loughton", "louth", "lowestoft", "ludgershall",
    "ludlow", "luton", "lutterworth", "lydd", "lydney", "lyme", "lymington", "lynton",
    "lytchett", "lytham", "mablethorpe", "macclesfield", "madeley", "maghull",
    "maidenhead", "maidstone", "maldon", "malmesbury", "maltby", "malton", "malvern",
    "manningtree", "mansfield", "marazion", "march", "margate", "marlborough", "marlow",
    "maryport", "masham", "matlock", "medlar", "melksham", "meltham", "melton", "mere",
    "mexborough", "middleham", "middlesbrough", "middleton", "middlewich", "midhurst",
    "midsomer", "mildenhall", "millom", "milton", "minchinhampton", "minehead", "minster",
    "mirfield", "mitcham", "mitcheldean", "modbury", "morecambe", "moreton",
    "moretonhampstead", "morley", "morpeth", "mossley", "much", "nailsea", "nailsworth",
    "nantwich", "needham", "nelson", "neston", "newark", "newbiggin", "newbury",
    "newcastle", "newent", "newhaven", "newlyn", "newmarket", "newport", "newquay",
    "newton", "normanton", "north", "northallerton", "northam", "northampton",
    "northfleet", "northleach", "northwich", "norton", "nuneaton", "oakengates", "oakham",
    "okehampton", "oldbury", "oldham", "ollerton", "olney", "ongar", "orford", "ormskirk",
    "ossett", "oswestry", "otley", "ottery", "oundle", "paddock", "padiham", "padstow",
    "paignton", "painswick", "partington", "patchway", "pateley", "peacehaven",
    "penistone", "penkridge", "penrith", "penryn", "penwortham", "penzance", "pershore",
    "peterlee", "petersfield", "petworth", "pickering", "plympton", "pocklington",
    "polegate", "pontefract", "ponteland", "poole", "porthleven", "portishead", "portland",
    "potton", "poynton", "preesall", "prescot", "princes", "prudhoe", "pudsey",
    "queenborough", "radstock", "ramsey", "ramsgate", "raunds", "rawtenstall", "rayleigh",
    "reading", "redcar", "redditch", "redenhall", "redruth", "reepham", "reigate",
    "richmond", "ringwood", "ripley", "rochdale", "rochester", "rochford", "romford",
    "romsey", "ross", "rothbury", "rotherham", "rothwell", "rowley", "royal", "royston",
    "rugby", "rugeley", "rushden", "ryde", "rye", "saffron", "salcombe", "sale",
    "saltash", "sandbach", "sandhurst", "sandiacre", "sandown", "sandwich", "sandy",
    "sawbridgeworth", "saxmundham", "scarborough", "scunthorpe", "seaford", "seaham",
    "seaton", "sedbergh", "sedgefield", "selby", "selsey", "settle", "sevenoaks",
    "shaftesbury", "shanklin", "shefford", "shepshed", "shepton", "sherborne",
    "sheringham", "shifnal", "shildon", "shipston", "shirebrook", "shoreham",
    "shrewsbury", "sidmouth", "silloth", "silsden", "sittingbourne", "skegness",
    "skelmersdale", "skelton", "skipton", "sleaford", "slough", "smethwick", "snaith",
    "snodland", "soham", "solihull", "somerton", "southall", "southam", "southborough",
    "southend", "southgate", "southminster", "southport", "southsea", "southwell",
    "southwick", "southwold", "spalding", "spennymoor", "spilsby", "sprowston",
    "stafford", "staines", "stainforth", "stalbridge", "stalham", "stalybridge",
    "stamford", "stanhope", "stanley", "stapleford", "staveley", "stevenage", "steyning",
    "stockport", "stocksbridge", "stockton", "stone", "stonehouse", "stony", "stotfold",
    "stourbridge", "stourport", "stow", "stowmarket", "stratford", "stretford", "strood",
    "stroud", "sturminster", "sudbury", "surbiton", "sutton", "swaffham", "swanage",
    "swanley", "swanscombe", "swindon", "syston", "tadcaster", "tadley", "tamworth",
    "taunton", "tavistock", "teignmouth", "telford", "telscombe", "tenbury", "tenterden",
    "tetbury", "tewkesbury", "thame", "thatcham", "thaxted", "thetford", "thirsk",
    "thornaby", "thornbury", "thorne", "thorpe", "thrapston", "tickhill", "tidworth",
    "tipton", "tisbury", "tiverton", "todmorden", "tonbridge", "topsham", "torpoint",
    "torquay", "totnes", "tottenham", "totton", "tow", "towcester", "town", "tring",
    "trowbridge", "twickenham", "tynemouth", "uckfield", "ulverston", "uppingham",
    "upton", "uttoxeter", "uxbridge", "ventnor", "verwood", "wadebridge", "wadhurst",
    "wainfleet", "wallasey", "wallingford", "wallsend", "walsall", "waltham",
    "walthamstow", "walton", "wantage", "ware", "wareham", "warminster", "warrington",
    "warwick", "washington", "watchet", "watford", "wath", "watlington", "watton",
    "wednesbury", "wellingborough", "wellington", "wells", "welwyn", "wembley",
    "wendover", "westbury", "westerham", "westhoughton", "weston", "wetherby",
    "weybridge", "weymouth", "whaley", "whitby", "whitchurch", "whitehaven", "whitehill",
    "whitnash", "whittlesey", "whitworth", "wickham", "wickwar", "widnes", "wigan",
    "wigton", "willenhall", "willesden", "wilmslow", "wilton", "wimbledon", "wimborne",
    "wincanton", "winchcombe", "winchelsea", "windermere", "windsor", "winsford",
    "winslow", "winterton", "wirksworth", "wisbech", "witham", "withernsea", "witney",
    "wiveliscombe", "wivenhoe", "woburn", "woking", "wokingham", "wolsingham",
    "wolverton", "wood", "woodbridge", "woodley", "woodstock", "wooler", "workington",
    "worksop", "worthing", "wotton", "wragby", "wymondham", "yarm", "yarmouth", "yate",
    "yateley", "yeovil",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A prior between 0.001 and 0.05 adds randomness by letting unseen
    // continuations through; 0.0 keeps pure maximum-likelihood counts
    let prior = 0.0;

    // Train an order-3 model on the town names
    let generator = WordGenerator::new(TRAIN_DATA, 3, prior);

    // Learned state can travel as an inert snapshot and be rebuilt
    // without retraining; a clone is a fully independent copy
    let _from_snapshot = WordGenerator::from_snapshot(generator.export_snapshot())?;
    let mut cloned = generator.clone();

    for _ in 0..11 {
        println!("{}", cloned.new_word(3, 8));
    }

    Ok(())
}
